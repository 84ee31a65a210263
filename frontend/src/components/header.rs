use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::config;
use crate::navigation::hooks::{use_header_scroll, use_overlay_menu};
use crate::navigation::menu::MenuAction;
use crate::navigation::routes::{active_entry, NAV_ROUTES};
use crate::Route;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <Link<Route> to={Route::Home} classes="brand">
            <span class="brand-mark">{"H"}</span>
            <span class="brand-text">
                <span class="brand-name">{"HydroX"}</span>
                <span class="brand-tagline">{"East African Ltd"}</span>
            </span>
        </Link<Route>>
    }
}

/// Fixed site header. Frosts once the page leaves the top, slides away
/// while reading downward and comes back on any upward scroll.
#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_header_scroll(config::header_thresholds());
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let active_path = active_entry(&current_path, NAV_ROUTES).map(|entry| entry.path);
    let menu = use_overlay_menu(current_path);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::LinkActivated))
    };

    let header_class = classes!(
        "site-header",
        nav.scrolled.then_some("is-scrolled"),
        nav.hidden.then_some("is-hidden"),
    );

    let desktop_links = NAV_ROUTES
        .iter()
        .map(|entry| {
            html! {
                <Link<Route>
                    key={entry.path}
                    to={entry.route}
                    classes={classes!("nav-link", (active_path == Some(entry.path)).then_some("active"))}
                >
                    {entry.label}
                </Link<Route>>
            }
        })
        .collect::<Html>();

    html! {
        <header class={header_class}>
            <nav class="section-container header-inner">
                <Logo />

                <div class="nav-links">{desktop_links}</div>

                <div class="header-cta">
                    <a href={config::PHONE_HREF} class="header-phone">
                        <span class="icon-chip"><i class="fas fa-phone"></i></span>
                        <span>{config::PHONE_DISPLAY}</span>
                    </a>
                    <LinkButton to={Route::Contact} variant={ButtonVariant::Accent} size={ButtonSize::Default}>
                        {"Request Quote"}
                    </LinkButton>
                </div>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    if menu.open {
                        <i class="fas fa-xmark"></i>
                    } else {
                        <i class="fas fa-bars"></i>
                    }
                </button>
            </nav>

            if menu.open {
                <div class="mobile-menu">
                    { for NAV_ROUTES.iter().map(|entry| html! {
                        <div key={entry.path} class="mobile-menu-item" onclick={close_menu.clone()}>
                            <Link<Route>
                                to={entry.route}
                                classes={classes!("mobile-link", (active_path == Some(entry.path)).then_some("active"))}
                            >
                                {entry.label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div class="mobile-menu-cta" onclick={close_menu.clone()}>
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Accent} class="w-full">
                            {"Request Quote"}
                        </LinkButton>
                    </div>
                </div>
            }
        </header>
    }
}
