use crate::Route;

/// A destination shown in the header and the mobile overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub route: Route,
}

pub const NAV_ROUTES: &[RouteEntry] = &[
    RouteEntry { label: "Home", path: "/", route: Route::Home },
    RouteEntry { label: "About", path: "/about", route: Route::About },
    RouteEntry { label: "Products", path: "/products", route: Route::Products },
    RouteEntry { label: "Services", path: "/services", route: Route::Services },
    RouteEntry { label: "Contact", path: "/contact", route: Route::Contact },
];

impl RouteEntry {
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Entry whose path equals `current_path` exactly. `/products/` and
/// `/products?x=1` do not match `/products`.
pub fn active_entry<'a>(current_path: &str, routes: &'a [RouteEntry]) -> Option<&'a RouteEntry> {
    routes.iter().find(|entry| entry.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    const SHORT: &[RouteEntry] = &[
        RouteEntry { label: "Home", path: "/", route: Route::Home },
        RouteEntry { label: "Products", path: "/products", route: Route::Products },
    ];

    #[test]
    fn highlights_exact_match_only() {
        let active = active_entry("/products", SHORT);
        assert_eq!(active.map(|entry| entry.label), Some("Products"));
        let flags: Vec<bool> = SHORT.iter().map(|entry| entry.is_active("/products")).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn unknown_path_highlights_nothing() {
        assert!(active_entry("/unknown", NAV_ROUTES).is_none());
        assert!(NAV_ROUTES.iter().all(|entry| !entry.is_active("/unknown")));
    }

    #[test]
    fn no_prefix_matching() {
        assert!(active_entry("/products/chillers", NAV_ROUTES).is_none());
        assert!(active_entry("/products/", NAV_ROUTES).is_none());
        assert!(active_entry("", NAV_ROUTES).is_none());
    }

    #[test]
    fn paths_agree_with_router() {
        for entry in NAV_ROUTES {
            assert_eq!(entry.route.to_path(), entry.path, "{}", entry.label);
        }
    }
}
