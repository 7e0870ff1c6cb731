use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// How far content sits below its resting place while hidden.
const HIDDEN_OFFSET_PX: u32 = 50;
const REVEAL_SECS: f32 = 0.8;
/// Start the reveal shortly before the content is fully on screen.
const TRIGGER_MARGIN: &str = "-100px";

fn reveal_style(visible: bool, delay_secs: f32) -> String {
    let (opacity, transform) = if visible {
        ("1", "translateY(0)".to_string())
    } else {
        ("0", format!("translateY({HIDDEN_OFFSET_PX}px)"))
    };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {REVEAL_SECS}s ease {delay_secs}s, \
         transform {REVEAL_SECS}s ease {delay_secs}s;"
    )
}

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    pub children: Children,
    /// Seconds to wait once the section has scrolled into view.
    #[prop_or_default]
    pub delay: f32,
}

/// Wraps content that slides up and fades in the first time it enters the
/// viewport. The reveal fires once; scrolling back out does not undo it.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let visible = use_state(|| false);
    let node_ref = use_node_ref();

    {
        let visible = visible.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut watcher = None;

                if let Some(element) = node_ref.cast::<Element>() {
                    let reveal = visible.clone();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let entered = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if entered {
                                reveal.set(true);
                                // One-shot: stop watching after the first hit.
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(TRIGGER_MARGIN);

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            watcher = Some((observer, callback));
                        }
                        // No observer support: show the content right away.
                        Err(_) => visible.set(true),
                    }
                } else {
                    visible.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node_ref} style={reveal_style(*visible, props.delay)}>
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_content_sits_low_and_transparent() {
        let style = reveal_style(false, 0.0);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(50px)"));
    }

    #[test]
    fn revealed_content_returns_to_rest() {
        let style = reveal_style(true, 0.0);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
    }

    #[test]
    fn the_start_delay_lands_in_the_transition() {
        let style = reveal_style(false, 0.2);
        assert!(style.contains("0.8s ease 0.2s"));
    }
}
