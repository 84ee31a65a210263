use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
    Hero,
    HeroOutline,
    Accent,
    Navy,
    Minimal,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Destructive => "btn-destructive",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::HeroOutline => "btn-hero-outline",
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Navy => "btn-navy",
            ButtonVariant::Minimal => "btn-minimal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Xl,
    Icon,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Xl => "btn-xl",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn {} {}", variant.class(), size.class())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    /// The `type` attribute.
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.kind.clone()}
            class={classes!(button_class(props.variant, props.size), props.class.clone())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub to: Route,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A router link styled as a button.
#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    html! {
        <Link<Route>
            to={props.to}
            classes={classes!(button_class(props.variant, props.size), props.class.clone())}
        >
            { for props.children.iter() }
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorButtonProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A plain anchor (`tel:`, `mailto:`, external) styled as a button.
#[function_component(AnchorButton)]
pub fn anchor_button(props: &AnchorButtonProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            class={classes!(button_class(props.variant, props.size), props.class.clone())}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default()),
            "btn btn-default btn-md"
        );
    }

    #[test]
    fn variant_and_size_compose() {
        assert_eq!(button_class(ButtonVariant::Accent, ButtonSize::Lg), "btn btn-accent btn-lg");
        assert_eq!(
            button_class(ButtonVariant::HeroOutline, ButtonSize::Xl),
            "btn btn-hero-outline btn-xl"
        );
    }
}
