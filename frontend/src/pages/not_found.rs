use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{ButtonVariant, LinkButton};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    {
        let path = path.clone();
        use_effect_with_deps(
            move |path: &String| {
                log::warn!("No page for {}", path);
                || ()
            },
            path,
        );
    }

    html! {
        <>
            <section class="page-hero not-found">
                <div class="section-container page-hero-inner">
                    <p class="eyebrow">{"404"}</p>
                    <h1>{"Page not found"}</h1>
                    <p class="page-hero-lead">{format!("There is nothing at {}.", path)}</p>
                    <LinkButton to={Route::Home} variant={ButtonVariant::Accent}>
                        {"Back to Home"}
                    </LinkButton>
                </div>
            </section>
        </>
    }
}
