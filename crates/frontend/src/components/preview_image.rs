//! Sketch preview image with placeholder fallback.

use portfolio_types::{PreviewSize, WeekId, placeholder_image_url};
use yew::prelude::*;

/// Properties for PreviewImage component.
#[derive(Properties, PartialEq)]
pub struct PreviewImageProps {
    pub week_id: WeekId,
    pub src: AttrValue,
    pub alt: AttrValue,
    pub size: PreviewSize,
}

/// Preview image component.
///
/// When `src` fails to load the image switches to a generated placeholder
/// for the week. A new `src` gets a fresh attempt.
#[function_component(PreviewImage)]
pub fn preview_image(props: &PreviewImageProps) -> Html {
    let failed_src = use_state_eq(|| None::<AttrValue>);

    let src: AttrValue = if (*failed_src).as_ref() == Some(&props.src) {
        placeholder_image_url(props.week_id, props.size).into()
    } else {
        props.src.clone()
    };

    let onerror = {
        let failed_src = failed_src.clone();
        let original = props.src.clone();
        let week_id = props.week_id;
        Callback::from(move |_: Event| {
            log::debug!("Preview for week {} failed to load: {}", week_id, original);
            failed_src.set(Some(original.clone()));
        })
    };

    html! {
        <img {src} alt={props.alt.clone()} {onerror} />
    }
}
