use yew::prelude::*;

use crate::components::animated::{AnimatedSection, Direction};
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::content::{ProductCategory, PRODUCTS};
use crate::Route;

fn product_row(index: usize, product: &ProductCategory) -> Html {
    // Alternate image side down the page
    let reversed = index % 2 == 1;
    let (image_from, text_from) = if reversed {
        (Direction::Left, Direction::Right)
    } else {
        (Direction::Right, Direction::Left)
    };

    html! {
        <div key={product.id} id={product.id} class={classes!("product-row", reversed.then_some("product-row-reversed"))}>
            <AnimatedSection direction={image_from} class="product-row-image">
                <img src={product.image} alt={product.title} loading="lazy" />
            </AnimatedSection>
            <AnimatedSection direction={text_from} delay={0.1} class="product-row-body">
                <h2>{product.title}</h2>
                <p class="lead">{product.description}</p>
                <h4>{"Key Features"}</h4>
                <ul class="check-list">
                    { for product.features.iter().map(|feature| html! {
                        <li key={*feature}><i class="fas fa-circle-check"></i><span>{*feature}</span></li>
                    }) }
                </ul>
                <h4>{"Applications"}</h4>
                <div class="tag-list">
                    { for product.applications.iter().map(|application| html! {
                        <span key={*application} class="tag">{*application}</span>
                    }) }
                </div>
                <LinkButton to={Route::Contact} variant={ButtonVariant::Accent}>
                    {"Request Quote"}<i class="fas fa-arrow-right"></i>
                </LinkButton>
            </AnimatedSection>
        </div>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <>
            <section class="page-hero">
                <div class="section-container page-hero-inner">
                    <AnimatedSection>
                        <p class="eyebrow">{"Our Products"}</p>
                        <h1>{"Industrial-Grade Solutions"}</h1>
                        <p class="page-hero-lead">
                            {"Premium cooling and filtration products designed for reliability, efficiency, and long-term performance in demanding environments."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section-padding">
                <div class="section-container product-rows">
                    { for PRODUCTS.iter().enumerate().map(|(index, product)| product_row(index, product)) }
                </div>
            </section>

            <section class="section-padding section-muted">
                <AnimatedSection class="section-container section-heading-center">
                    <h2>{"Need Help Choosing?"}</h2>
                    <p class="lead">
                        {"Our technical team can help you select the right products for your specific requirements. Contact us for a free consultation."}
                    </p>
                    <LinkButton to={Route::Contact} size={ButtonSize::Lg}>
                        {"Contact Our Team"}<i class="fas fa-arrow-right"></i>
                    </LinkButton>
                </AnimatedSection>
            </section>
        </>
    }
}
