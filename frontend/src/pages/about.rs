use yew::prelude::*;

use crate::components::animated::{AnimatedSection, Direction, StaggerContainer, StaggerItem};
use crate::content::{COUNTRIES, MILESTONES, STRENGTHS, VALUES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <>
            <section class="page-hero">
                <div class="section-container page-hero-inner">
                    <AnimatedSection>
                        <p class="eyebrow">{"About Us"}</p>
                        <h1>{"Your Trusted Partner in Industrial Solutions"}</h1>
                        <p class="page-hero-lead">
                            {"For over 15 years, HydroX East African Ltd has been the region's trusted provider of industrial cooling and water filtration solutions."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-padding">
                <div class="section-container split">
                    <AnimatedSection direction={Direction::Right}>
                        <p class="eyebrow">{"Our Mission"}</p>
                        <h2>{"Keeping Critical Systems Running"}</h2>
                        <p class="lead">
                            {"To provide reliable, efficient, and cost-effective cooling and water treatment solutions that keep East Africa's critical infrastructure running smoothly."}
                        </p>
                        <p class="muted">
                            {"We understand that downtime costs money and disrupts operations. That's why we've built our company around one principle: reliability. Every product we supply, every system we install, and every service we provide is designed to keep your operations running without interruption."}
                        </p>
                        <ul class="check-list">
                            { for STRENGTHS.iter().map(|item| html! {
                                <li key={*item}><i class="fas fa-circle-check"></i><span>{*item}</span></li>
                            }) }
                        </ul>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Left} class="timeline">
                        { for MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                            <div key={milestone.year} class="timeline-item">
                                <div class="timeline-marker">
                                    <span class="timeline-year">{milestone.year}</span>
                                    if index + 1 < MILESTONES.len() {
                                        <span class="timeline-line"></span>
                                    }
                                </div>
                                <div class="timeline-body">
                                    <h3>{milestone.title}</h3>
                                    <p class="muted">{milestone.description}</p>
                                </div>
                            </div>
                        }) }
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-padding section-muted">
                <div class="section-container">
                    <AnimatedSection class="section-heading section-heading-center">
                        <p class="eyebrow">{"Our Values"}</p>
                        <h2>{"What Drives Us"}</h2>
                    </AnimatedSection>
                    <StaggerContainer class="card-grid card-grid-3">
                        { for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <StaggerItem key={value.title} index={index} class="card">
                                <div class="icon-tile"><i class={value.icon}></i></div>
                                <h3>{value.title}</h3>
                                <p class="muted">{value.description}</p>
                            </StaggerItem>
                        }) }
                    </StaggerContainer>
                </div>
            </section>

            <section class="section-padding">
                <div class="section-container section-heading-center">
                    <AnimatedSection>
                        <p class="eyebrow">{"Regional Presence"}</p>
                        <h2>{"Serving East Africa"}</h2>
                        <p class="lead">
                            {"With headquarters in Nairobi and operations across Kenya, Tanzania, and Uganda, we're positioned to serve clients throughout the region with fast response times and local expertise."}
                        </p>
                        <div class="country-list">
                            { for COUNTRIES.iter().map(|country| html! {
                                <span key={*country} class="country-pill">
                                    <i class="fas fa-location-dot"></i>{*country}
                                </span>
                            }) }
                        </div>
                    </AnimatedSection>
                </div>
            </section>
        </>
    }
}
