//! Gradient action buttons for the dashboard header.

use yew::prelude::*;

/// Color variant of a header action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Overview,
    Build,
    Excel,
    Csv,
    Settings,
    Advanced,
}

impl GradientKind {
    fn class(self) -> &'static str {
        match self {
            Self::Overview => "gradient-btn-overview",
            Self::Build => "gradient-btn-build",
            Self::Excel => "gradient-btn-excel",
            Self::Csv => "gradient-btn-csv",
            Self::Settings => "gradient-btn-settings",
            Self::Advanced => "gradient-btn-advanced",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    pub kind: GradientKind,
    pub children: Children,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    html! {
        <button
            class={classes!("gradient-btn", props.kind.class())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
