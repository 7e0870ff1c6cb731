use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::image_fallback::ImageWithFallback;

/// How long each image stays up before the gallery moves on.
const ROTATE_EVERY_MS: u32 = 4_000;
const CROSS_FADE_SECS: f32 = 0.8;

pub enum GalleryAction {
    /// Periodic timer tick.
    Advance,
    /// Indicator dot pressed.
    Jump(usize),
}

/// Index arithmetic for the gallery, kept out of the component so the
/// wrap-around and jump behavior can be exercised directly.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    len: usize,
    current: usize,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // An empty gallery has nothing to move between.
        if self.len == 0 {
            return self;
        }
        let current = match action {
            GalleryAction::Advance => (self.current + 1) % self.len,
            GalleryAction::Jump(target) if target < self.len => target,
            GalleryAction::Jump(_) => self.current,
        };
        Rc::new(Self {
            len: self.len,
            current,
        })
    }
}

fn slide_style(index: usize, current: usize) -> String {
    let opacity = if index == current { "1" } else { "0" };
    format!("opacity: {opacity}; transition: opacity {CROSS_FADE_SECS}s ease;")
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<AttrValue>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let gallery = use_reducer(|| GalleryState::new(props.images.len()));

    // One interval for the whole lifetime of the component. Dot clicks go
    // through the same reducer and leave the tick phase alone; the cleanup
    // drops the handle so no tick can land after unmount.
    {
        let dispatcher = gallery.dispatcher();
        use_effect_with_deps(
            move |len: &usize| {
                let interval = (*len > 0).then(|| {
                    Interval::new(ROTATE_EVERY_MS, move || {
                        dispatcher.dispatch(GalleryAction::Advance);
                    })
                });
                move || drop(interval)
            },
            props.images.len(),
        );
    }

    if props.images.is_empty() {
        return html! {};
    }

    html! {
        <div class="carousel">
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        aspect-ratio: 4 / 3;
                    }
                    .carousel-slide {
                        position: absolute;
                        inset: 0;
                    }
                    .carousel-slide img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .carousel-dots {
                        position: absolute;
                        bottom: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.5rem;
                        z-index: 10;
                    }
                    .carousel-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 9999px;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                        background: rgba(255, 255, 255, 0.5);
                        transition: all 0.3s ease;
                    }
                    .carousel-dot.current {
                        width: 32px;
                        background: #fff;
                    }
                "#}
            </style>
            { for props.images.iter().enumerate().map(|(index, src)| html! {
                <div class="carousel-slide" style={slide_style(index, gallery.current())}>
                    <ImageWithFallback
                        src={src.clone()}
                        alt={format!("Liv Collection {}", index + 1)}
                    />
                </div>
            })}
            <div class="carousel-dots">
                { for (0..props.images.len()).map(|index| {
                    let onclick = {
                        let gallery = gallery.clone();
                        Callback::from(move |_| gallery.dispatch(GalleryAction::Jump(index)))
                    };
                    let class = if index == gallery.current() {
                        "carousel-dot current"
                    } else {
                        "carousel-dot"
                    };
                    html! {
                        <button
                            class={class}
                            onclick={onclick}
                            aria-label={format!("Go to image {}", index + 1)}
                        />
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize, current: usize) -> Rc<GalleryState> {
        Rc::new(GalleryState { len, current })
    }

    #[test]
    fn starts_at_the_first_image() {
        assert_eq!(GalleryState::new(7).current(), 0);
    }

    #[test]
    fn full_rotations_return_to_the_start() {
        for rotations in 0..4 {
            let mut gallery = state(7, 0);
            for _ in 0..7 * rotations {
                gallery = gallery.reduce(GalleryAction::Advance);
            }
            assert_eq!(gallery.current(), 0);
        }
    }

    #[test]
    fn ticks_advance_in_order_and_wrap() {
        let mut gallery = state(3, 0);
        let mut seen = Vec::new();
        for _ in 0..6 {
            gallery = gallery.reduce(GalleryAction::Advance);
            seen.push(gallery.current());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn jump_takes_effect_immediately_and_the_next_tick_continues_from_it() {
        let gallery = state(7, 1).reduce(GalleryAction::Jump(5));
        assert_eq!(gallery.current(), 5);
        let gallery = gallery.reduce(GalleryAction::Advance);
        assert_eq!(gallery.current(), 6);
    }

    #[test]
    fn jump_past_the_end_is_ignored() {
        let gallery = state(7, 3).reduce(GalleryAction::Jump(7));
        assert_eq!(gallery.current(), 3);
    }

    #[test]
    fn empty_gallery_never_moves() {
        let gallery = state(0, 0)
            .reduce(GalleryAction::Advance)
            .reduce(GalleryAction::Jump(2));
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn a_single_image_stays_put() {
        let gallery = state(1, 0).reduce(GalleryAction::Advance);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn exactly_one_slide_is_fully_opaque() {
        let opaque = (0..7)
            .filter(|index| slide_style(*index, 4).contains("opacity: 1"))
            .count();
        assert_eq!(opaque, 1);
    }
}
