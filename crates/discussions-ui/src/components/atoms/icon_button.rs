use yew::prelude::*;

/// Props for icon-only trigger buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Whether the popup this button controls is open.
    #[prop_or_default]
    pub expanded: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!(
        "btn",
        "btn-ghost",
        "btn-xs",
        "btn-square",
        props.class.clone()
    );
    html! {
        <button
            class={classes}
            type="button"
            aria-label={props.aria_label.clone()}
            aria-haspopup="menu"
            aria-expanded={if props.expanded { "true" } else { "false" }}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {for props.children.iter()}
        </button>
    }
}
