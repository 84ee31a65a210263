use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod components;
mod config;
mod contact;
mod content;
mod logging;
mod navigation;
mod pages;

use components::layout::Layout;
use components::toast::ToastProvider;
use pages::{
    about::About, contact::Contact, home::Home, not_found::NotFound, products::Products,
    services::Services,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Products => html! { <Products /> },
        Route::Services => html! { <Services /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    if let Err(err) = logging::init(config::get_log_level()) {
        gloo_console::error!(format!("Logger setup failed: {}", err));
    }
    log::info!("Starting HydroX site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_site_paths() {
        assert_eq!(Route::recognize("/products"), Some(Route::Products));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
