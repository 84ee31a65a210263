use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const COMPANY_LINKS: &[(&str, Route)] = &[
    ("About", Route::About),
    ("Products", Route::Products),
    ("Services", Route::Services),
    ("Contact", Route::Contact),
];

const SOLUTION_LINKS: &[(&str, Route)] = &[
    ("Industrial Coolants", Route::Products),
    ("Commercial Chillers", Route::Products),
    ("Water Filtration", Route::Products),
];

fn link_column(title: &'static str, links: &'static [(&'static str, Route)]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                { for links.iter().map(|(label, route)| html! {
                    <li key={*label}>
                        <Link<Route> to={*route} classes="footer-link">
                            {*label}
                            <i class="fas fa-arrow-up-right-from-square footer-link-icon"></i>
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-container footer-top">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="brand brand-inverted">
                        <span class="brand-mark">{"H"}</span>
                        <span class="brand-text">
                            <span class="brand-name">{"HydroX"}</span>
                            <span class="brand-tagline">{"East African Ltd"}</span>
                        </span>
                    </Link<Route>>
                    <p class="footer-blurb">
                        {"Trusted industrial cooling and water filtration solutions for hotels, factories, and commercial facilities across East Africa."}
                    </p>
                    <div class="footer-contact">
                        <div class="footer-address">
                            <i class="fas fa-location-dot"></i>
                            <div>
                                { for config::HEAD_OFFICE_ADDRESS.iter().map(|line| html! { <p>{*line}</p> }) }
                            </div>
                        </div>
                        <div class="footer-person">
                            <span class="muted">{"Contact:"}</span>
                            <span>{config::CONTACT_PERSON}</span>
                        </div>
                        <a href={format!("mailto:{}", config::HEAD_OFFICE_EMAIL)} class="footer-contact-link">
                            <i class="fas fa-envelope"></i>
                            <span>{config::HEAD_OFFICE_EMAIL}</span>
                        </a>
                        <a href={config::WEBSITE_URL} target="_blank" rel="noopener noreferrer" class="footer-contact-link">
                            <i class="fas fa-globe"></i>
                            <span>{"www.hydro-x.com"}</span>
                        </a>
                    </div>
                </div>
                <div class="footer-links">
                    { link_column("Company", COMPANY_LINKS) }
                    { link_column("Solutions", SOLUTION_LINKS) }
                </div>
            </div>
            <div class="footer-bottom">
                <div class="section-container footer-bottom-inner">
                    <p>{format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
