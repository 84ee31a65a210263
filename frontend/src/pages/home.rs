use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated::{
    AnimatedSection, Counter, Direction, ScrollProgress, StaggerContainer, StaggerItem,
};
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::content::{HOME_SERVICES, INDUSTRIES, PRODUCTS, STATS, WHY_US};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <ScrollProgress />

            <section class="hero">
                <div class="hero-background">
                    <img src="/assets/hero-industrial.jpg" alt="Industrial cooling systems" />
                </div>
                <div class="hero-mesh"></div>
                <div class="section-container hero-content">
                    <AnimatedSection delay={0.2}>
                        <span class="badge badge-glass">
                            <span class="pulse-dot"></span>
                            {"Trusted Industrial Partner"}
                        </span>
                    </AnimatedSection>
                    <AnimatedSection delay={0.3} duration={0.8}>
                        <h1 class="hero-title">
                            {"Cooling & Filtration"}<br/>
                            <span class="text-gradient-accent">{"Solutions"}</span>{" for Industry"}
                        </h1>
                    </AnimatedSection>
                    <AnimatedSection delay={0.4} duration={0.8}>
                        <p class="hero-subtitle">
                            {"Reducing downtime, controlling costs, and keeping critical systems running across East Africa since 2009."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection delay={0.5} duration={0.8} class="hero-cta-group">
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Hero} size={ButtonSize::Xl}>
                            {"Request Site Audit"}<i class="fas fa-arrow-right"></i>
                        </LinkButton>
                        <LinkButton to={Route::Products} variant={ButtonVariant::HeroOutline} size={ButtonSize::Xl}>
                            {"View Products"}<i class="fas fa-arrow-up-right-from-square"></i>
                        </LinkButton>
                    </AnimatedSection>
                </div>
                <div class="scroll-indicator">
                    <span>{"Scroll"}</span>
                    <div class="scroll-indicator-line"></div>
                </div>
            </section>

            <section class="stats-section">
                <StaggerContainer class="section-container stats-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <StaggerItem key={stat.label} index={index} class="stat-card">
                            <div class="icon-chip"><i class={stat.icon}></i></div>
                            <Counter class="stat-value" end={stat.value} suffix={stat.suffix} />
                            <div class="stat-label">{stat.label}</div>
                        </StaggerItem>
                    }) }
                </StaggerContainer>
            </section>

            <section class="section-padding">
                <div class="section-container">
                    <AnimatedSection class="section-heading">
                        <span class="badge">{"Industries We Serve"}</span>
                        <h2>{"Trusted Across Sectors"}</h2>
                    </AnimatedSection>
                    <StaggerContainer class="card-grid card-grid-3">
                        { for INDUSTRIES.iter().enumerate().map(|(index, industry)| html! {
                            <StaggerItem key={industry.title} index={index} class="card">
                                <div class="icon-tile"><i class={industry.icon}></i></div>
                                <h3>{industry.title}</h3>
                                <p class="muted">{industry.description}</p>
                            </StaggerItem>
                        }) }
                    </StaggerContainer>
                </div>
            </section>

            <section class="section-padding section-muted">
                <div class="section-container">
                    <AnimatedSection class="section-heading section-heading-split">
                        <div>
                            <span class="badge">{"Our Solutions"}</span>
                            <h2>{"Industrial-Grade Products"}</h2>
                        </div>
                        <LinkButton to={Route::Products} variant={ButtonVariant::Outline}>
                            {"View All"}<i class="fas fa-arrow-up-right-from-square"></i>
                        </LinkButton>
                    </AnimatedSection>
                    <StaggerContainer class="card-grid card-grid-3">
                        { for PRODUCTS.iter().enumerate().map(|(index, product)| html! {
                            <StaggerItem key={product.id} index={index}>
                                <Link<Route> to={Route::Products} classes="product-card">
                                    <div class="product-card-image">
                                        <img src={product.image} alt={product.title} loading="lazy" />
                                    </div>
                                    <div class="product-card-body">
                                        <h3>{product.title}</h3>
                                        <p class="muted">{product.summary}</p>
                                        <span class="learn-more">{"Learn more "}<i class="fas fa-arrow-right"></i></span>
                                    </div>
                                </Link<Route>>
                            </StaggerItem>
                        }) }
                    </StaggerContainer>
                </div>
            </section>

            <section class="section-padding section-dark">
                <div class="section-container">
                    <AnimatedSection class="section-heading section-heading-center">
                        <span class="badge badge-glass">{"Professional Services"}</span>
                        <h2>{"End-to-End Support"}</h2>
                        <p>{"From consultation to ongoing maintenance, comprehensive support for your systems."}</p>
                    </AnimatedSection>
                    <StaggerContainer class="card-grid card-grid-4">
                        { for HOME_SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <StaggerItem key={service.title} index={index} class="card card-glass">
                                <div class="icon-chip"><i class={service.icon}></i></div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </StaggerItem>
                        }) }
                    </StaggerContainer>
                    <AnimatedSection class="section-actions">
                        <LinkButton to={Route::Services} variant={ButtonVariant::HeroOutline} size={ButtonSize::Lg}>
                            {"Explore Services"}<i class="fas fa-arrow-right"></i>
                        </LinkButton>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-padding">
                <div class="section-container split">
                    <AnimatedSection direction={Direction::Right}>
                        <span class="badge">{"Why HydroX"}</span>
                        <h2>{"A Partner You Can Trust"}</h2>
                        <p class="lead">
                            {"With over 15 years of experience in East Africa, we've built a reputation for reliability, technical expertise, and lasting partnerships."}
                        </p>
                        <ul class="check-list">
                            { for WHY_US.iter().map(|item| html! {
                                <li key={*item}><i class="fas fa-circle-check"></i><span>{*item}</span></li>
                            }) }
                        </ul>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Left} class="cta-card">
                        <h3>{"Ready to get started?"}</h3>
                        <p>{"Book a free site audit and find out where your cooling and water systems are losing money."}</p>
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Accent} size={ButtonSize::Lg}>
                            {"Request Site Audit"}<i class="fas fa-arrow-right"></i>
                        </LinkButton>
                    </AnimatedSection>
                </div>
            </section>
        </>
    }
}
