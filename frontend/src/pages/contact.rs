use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animated::{AnimatedSection, Direction};
use crate::components::button::{AnchorButton, Button, ButtonSize, ButtonVariant};
use crate::components::toast::use_toast;
use crate::config;
use crate::contact::{submit_inquiry, ContactInquiry, SUCCESS_MESSAGE};
use crate::content::CONTACT_CHANNELS;

fn on_input(
    form: &UseStateHandle<ContactInquiry>,
    apply: fn(&mut ContactInquiry, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let form = use_state(ContactInquiry::default);
    let submitting = use_state(|| false);
    let toast = use_toast();

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                if let Some(toast) = &toast {
                    toast.info("Your message is already on its way.");
                }
                return;
            }
            let inquiry = (*form).clone().normalized();
            if let Err(err) = inquiry.validate() {
                log::warn!("Contact form rejected: {}", err);
                if let Some(toast) = &toast {
                    toast.error(err.to_string());
                }
                return;
            }

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let result = submit_inquiry(&inquiry).await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        if let Some(toast) = &toast {
                            toast.success(SUCCESS_MESSAGE);
                        }
                        form.set(ContactInquiry::default());
                    }
                    Err(err) => {
                        log::error!("Failed to submit contact inquiry: {}", err);
                        if let Some(toast) = &toast {
                            toast.error(err.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = textarea.value();
            form.set(next);
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-row">
                <div class="form-field">
                    <label for="name">{"Full Name *"}</label>
                    <input id="name" name="name" placeholder="John Smith" required=true
                        value={form.name.clone()}
                        oninput={on_input(&form, |inquiry, value| inquiry.name = value)} />
                </div>
                <div class="form-field">
                    <label for="company">{"Company Name"}</label>
                    <input id="company" name="company" placeholder="Your Company Ltd"
                        value={form.company.clone().unwrap_or_default()}
                        oninput={on_input(&form, |inquiry, value| inquiry.company = Some(value))} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-field">
                    <label for="email">{"Email Address *"}</label>
                    <input id="email" name="email" type="email" placeholder="john@company.com" required=true
                        value={form.email.clone()}
                        oninput={on_input(&form, |inquiry, value| inquiry.email = value)} />
                </div>
                <div class="form-field">
                    <label for="phone">{"Phone Number *"}</label>
                    <input id="phone" name="phone" type="tel" placeholder={config::PHONE_DISPLAY} required=true
                        value={form.phone.clone()}
                        oninput={on_input(&form, |inquiry, value| inquiry.phone = value)} />
                </div>
            </div>
            <div class="form-field">
                <label for="subject">{"Subject *"}</label>
                <input id="subject" name="subject" placeholder="How can we help you?" required=true
                    value={form.subject.clone()}
                    oninput={on_input(&form, |inquiry, value| inquiry.subject = value)} />
            </div>
            <div class="form-field">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="6" required=true
                    placeholder="Please describe your requirements or questions..."
                    value={form.message.clone()}
                    oninput={on_message} />
            </div>
            <Button kind="submit" variant={ButtonVariant::Accent} size={ButtonSize::Lg} disabled={*submitting}>
                if *submitting {
                    {"Sending..."}
                } else {
                    {"Send Message"}
                }
            </Button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <section class="page-hero">
                <div class="section-container page-hero-inner">
                    <AnimatedSection>
                        <p class="eyebrow">{"Contact Us"}</p>
                        <h1>{"Get in Touch"}</h1>
                        <p class="page-hero-lead">
                            {"Ready to discuss your cooling or filtration needs? Our team is here to help with quotes, technical questions, or service requests."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-padding">
                <div class="section-container contact-grid">
                    <AnimatedSection direction={Direction::Right} class="contact-info">
                        <h2>{"Contact Information"}</h2>
                        <div class="contact-channels">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div key={channel.title} class="contact-channel">
                                    <div class="icon-chip"><i class={channel.icon}></i></div>
                                    <div>
                                        <p class="muted small">{channel.title}</p>
                                        if let Some(href) = channel.href {
                                            <a href={href} class="contact-value">{channel.value}</a>
                                        } else {
                                            <p class="contact-value">{channel.value}</p>
                                        }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="emergency">
                            <h3>{"Emergency Support"}</h3>
                            <p class="muted">{"For urgent system failures, our emergency line is available 24/7."}</p>
                            <AnchorButton href={config::PHONE_HREF} variant={ButtonVariant::Accent}>
                                <i class="fas fa-phone"></i>{"Emergency Line"}
                            </AnchorButton>
                        </div>
                    </AnimatedSection>

                    <AnimatedSection direction={Direction::Left} delay={0.1} class="card card-elevated contact-form-card">
                        <h2>{"Send Us a Message"}</h2>
                        <p class="muted">{"Fill out the form below and our team will respond within 24 business hours."}</p>
                        <ContactForm />
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-muted">
                <div class="section-container map-placeholder">
                    <i class="fas fa-location-dot"></i>
                    <p class="muted">{"Interactive map will be displayed here"}</p>
                    <p class="muted small">{config::NAIROBI_ADDRESS}</p>
                </div>
            </section>
        </>
    }
}
