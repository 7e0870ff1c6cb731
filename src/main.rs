use log::{info, Level};
use yew::prelude::*;

mod components {
    pub mod carousel;
    pub mod fade_in;
    pub mod image_fallback;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! { <Home /> }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Liv Collection owners site");
    yew::Renderer::<App>::new().render();
}
