use yew::prelude::*;

// Neutral "broken image" glyph shown when an asset fails to load.
const FALLBACK_SRC: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' width='88' height='88' fill='none' stroke='%23999999' stroke-width='1.5'><rect x='3' y='3' width='18' height='18' rx='2'/><circle cx='8.5' cy='8.5' r='1.5'/><path d='M21 15l-5-5-11 11'/></svg>";

#[derive(Properties, PartialEq)]
pub struct ImageWithFallbackProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An image that swaps to a placeholder glyph instead of showing the
/// browser's broken-image marker.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let failed = use_state(|| false);

    if *failed {
        return html! {
            <div class={classes!("image-fallback", props.class.clone())}>
                <img src={FALLBACK_SRC} alt={props.alt.clone()} />
            </div>
        };
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <img
            class={props.class.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            onerror={onerror}
        />
    }
}
