use std::rc::Rc;
use yew::prelude::*;

/// Small-viewport overlay menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// The hamburger button.
    Toggle,
    /// A link inside the overlay was clicked.
    LinkActivated,
    RouteChanged,
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => Self { open: !self.open },
            MenuAction::LinkActivated | MenuAction::RouteChanged => Self { open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn toggle_flips() {
        let open = MenuState::default().apply(MenuAction::Toggle);
        assert!(open.open);
        assert!(!open.apply(MenuAction::Toggle).open);
    }

    #[test]
    fn link_activation_closes() {
        let state = MenuState::default()
            .apply(MenuAction::Toggle)
            .apply(MenuAction::LinkActivated);
        assert!(!state.open);
    }

    #[test]
    fn route_change_closes() {
        let state = MenuState { open: true }.apply(MenuAction::RouteChanged);
        assert!(!state.open);
    }

    #[test]
    fn reduce_keeps_allocation_when_unchanged() {
        let closed = Rc::new(MenuState::default());
        let same = closed.clone().reduce(MenuAction::LinkActivated);
        assert!(Rc::ptr_eq(&closed, &same));
        let open = closed.reduce(MenuAction::Toggle);
        assert!(open.open);
    }
}
