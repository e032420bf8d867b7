use crate::core::actions::IconRef;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Render the icon component for a catalogue icon reference.
pub(crate) fn action_icon(icon: IconRef, size: &'static str) -> Html {
    let size = Some(AttrValue::from(size));
    match icon {
        IconRef::Link => html! { <IconLink {size} /> },
        IconRef::Edit => html! { <IconEdit {size} /> },
        IconRef::Pin => html! { <IconPin {size} /> },
        IconRef::Check => html! { <IconCheck {size} /> },
        IconRef::CheckCircle => html! { <IconCheckCircle {size} /> },
        IconRef::Lock => html! { <IconLock {size} /> },
        IconRef::Unlock => html! { <IconUnlock {size} /> },
        IconRef::Flag => html! { <IconFlag {size} /> },
        IconRef::Trash => html! { <IconTrash {size} /> },
        IconRef::MoreVertical => html! { <IconMoreVertical {size} /> },
    }
}

#[function_component(IconCheck)]
pub(crate) fn icon_check(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M20 6L9 17l-5-5" /> })
}

#[function_component(IconCheckCircle)]
pub(crate) fn icon_check_circle(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12l2 2l4-4" />
        </> },
    )
}

#[function_component(IconEdit)]
pub(crate) fn icon_edit(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 20h9M16.38 3.62a1 1 0 0 1 3 3L7.37 18.64a2 2 0 0 1-.86.5l-2.87.84a.5.5 0 0 1-.62-.62l.84-2.87a2 2 0 0 1 .5-.86z" /> },
    )
}

#[function_component(IconFlag)]
pub(crate) fn icon_flag(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M4 22V4a1 1 0 0 1 .4-.8A6 6 0 0 1 8 2c3 0 5 2 7.33 2q2 0 3.67-1.33a1 1 0 0 1 1 .8v10.5a1 1 0 0 1-.4.8A6 6 0 0 1 16 16c-3 0-5-2-8-2a6 6 0 0 0-4 1.53" /> },
    )
}

#[function_component(IconLink)]
pub(crate) fn icon_link(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71m3.25 7.82a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" /> },
    )
}

#[function_component(IconLock)]
pub(crate) fn icon_lock(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect width="18" height="11" x="3" y="11" rx="2" ry="2" />
            <path d="M7 11V7a5 5 0 0 1 10 0v4" />
        </> },
    )
}

#[function_component(IconMoreVertical)]
pub(crate) fn icon_more_vertical(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="1" />
            <circle cx="12" cy="5" r="1" />
            <circle cx="12" cy="19" r="1" />
        </> },
    )
}

#[function_component(IconPin)]
pub(crate) fn icon_pin(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 17v5M9 10.76a2 2 0 0 1-1.11 1.79l-1.78.9A2 2 0 0 0 5 15.24V16a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-.76a2 2 0 0 0-1.11-1.79l-1.78-.9A2 2 0 0 1 15 10.76V7a1 1 0 0 1 1-1a2 2 0 0 0 0-4H8a2 2 0 0 0 0 4a1 1 0 0 1 1 1z" /> },
    )
}

#[function_component(IconTrash)]
pub(crate) fn icon_trash(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3 6h18m-2 0v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6m3 0V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2m-6 5v6m4-6v6" /> },
    )
}

#[function_component(IconUnlock)]
pub(crate) fn icon_unlock(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect width="18" height="11" x="3" y="11" rx="2" ry="2" />
            <path d="M7 11V7a5 5 0 0 1 9.9-1" />
        </> },
    )
}
