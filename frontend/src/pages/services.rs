use yew::prelude::*;

use crate::components::animated::{AnimatedSection, StaggerContainer, StaggerItem};
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::content::{PROCESS, SERVICES};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <>
            <section class="page-hero">
                <div class="section-container page-hero-inner">
                    <AnimatedSection>
                        <p class="eyebrow">{"Our Services"}</p>
                        <h1>{"Comprehensive Support for Your Systems"}</h1>
                        <p class="page-hero-lead">
                            {"From installation to emergency response, we provide end-to-end services to keep your cooling and water systems operating at peak performance."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-padding">
                <StaggerContainer class="section-container card-grid card-grid-3">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <StaggerItem key={service.title} index={index} class="card service-card">
                            <div class="icon-tile"><i class={service.icon}></i></div>
                            <h3>{service.title}</h3>
                            <p class="muted">{service.description}</p>
                            <ul class="dot-list">
                                { for service.details.iter().map(|detail| html! {
                                    <li key={*detail}>{*detail}</li>
                                }) }
                            </ul>
                        </StaggerItem>
                    }) }
                </StaggerContainer>
            </section>

            <section class="section-padding section-muted">
                <div class="section-container">
                    <AnimatedSection class="section-heading section-heading-center">
                        <p class="eyebrow">{"How We Work"}</p>
                        <h2>{"Our Service Process"}</h2>
                    </AnimatedSection>
                    <StaggerContainer class="process-grid">
                        { for PROCESS.iter().enumerate().map(|(index, step)| html! {
                            <StaggerItem key={step.step} index={index} class="process-step">
                                <span class="process-number">{step.step}</span>
                                if index + 1 < PROCESS.len() {
                                    <span class="process-connector"></span>
                                }
                                <h3>{step.title}</h3>
                                <p class="muted">{step.description}</p>
                            </StaggerItem>
                        }) }
                    </StaggerContainer>
                </div>
            </section>

            <section class="section-padding section-dark">
                <AnimatedSection class="section-container section-heading-center">
                    <h2>{"Need Service Support?"}</h2>
                    <p>
                        {"Contact us today to discuss your service requirements. Our team is ready to help you maintain peak system performance."}
                    </p>
                    <LinkButton to={Route::Contact} variant={ButtonVariant::Hero} size={ButtonSize::Lg}>
                        {"Request Service"}<i class="fas fa-arrow-right"></i>
                    </LinkButton>
                </AnimatedSection>
            </section>
        </>
    }
}
