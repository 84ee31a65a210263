//! Toast notifications

use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-circle-check",
            ToastKind::Error => "fas fa-circle-exclamation",
            ToastKind::Info => "fas fa-circle-info",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }

    fn dismiss_after_ms(self) -> u32 {
        match self {
            ToastKind::Error => config::TOAST_ERROR_DISMISS_MS,
            _ => config::TOAST_DISMISS_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
    pub dismiss_after_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
    next_id: usize,
}

pub enum ToastAction {
    Push { message: String, kind: ToastKind },
    Dismiss(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { message, kind } => {
                let mut next = (*self).clone();
                next.toasts.push(Toast {
                    id: next.next_id,
                    message,
                    kind,
                    dismiss_after_ms: kind.dismiss_after_ms(),
                });
                next.next_id += 1;
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|toast| toast.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|toast| toast.id != id);
                Rc::new(next)
            }
        }
    }
}

/// Shared through context so any page can raise a toast.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl ToastHandle {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.dispatcher.dispatch(ToastAction::Push {
            message: message.into(),
            kind,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }
}

#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = ToastHandle {
        dispatcher: list.dispatcher(),
    };
    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            <div class="toaster" aria-live="polite">
                { for list.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<usize>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |dismiss_after_ms: &u32| {
                let timeout = Timeout::new(*dismiss_after_ms, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.dismiss_after_ms,
        );
    }

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.class())} role="status" onclick={onclick}>
            <i class={props.toast.kind.icon()}></i>
            <span>{ props.toast.message.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, message: &str, kind: ToastKind) -> Rc<ToastList> {
        list.reduce(ToastAction::Push {
            message: message.to_string(),
            kind,
        })
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let list = Rc::new(ToastList::default());
        let list = push(list, "one", ToastKind::Success);
        let list = push(list, "two", ToastKind::Info);
        let ids: Vec<usize> = list.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn errors_linger_longer() {
        let list = push(Rc::new(ToastList::default()), "bad", ToastKind::Error);
        assert_eq!(list.toasts[0].dismiss_after_ms, config::TOAST_ERROR_DISMISS_MS);
        let list = push(list, "ok", ToastKind::Success);
        assert_eq!(list.toasts[1].dismiss_after_ms, config::TOAST_DISMISS_MS);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = push(Rc::new(ToastList::default()), "a", ToastKind::Info);
        let list = push(list, "b", ToastKind::Info);
        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].message, "b");
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let list = push(Rc::new(ToastList::default()), "a", ToastKind::Info);
        let same = list.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&list, &same));
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let list = push(Rc::new(ToastList::default()), "a", ToastKind::Info);
        let list = list.reduce(ToastAction::Dismiss(0));
        let list = push(list, "b", ToastKind::Info);
        assert_eq!(list.toasts[0].id, 1);
    }
}
