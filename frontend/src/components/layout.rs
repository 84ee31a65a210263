use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::navigation::hooks::use_scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page chrome shared by every route. Sits above the router switch so the
/// header keeps its scroll and menu state across navigation.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    use_scroll_to_top(current_path);

    html! {
        <div class="site">
            <Header />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
