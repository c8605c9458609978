use log::{info, Level};
use yew::prelude::*;

mod config;
mod effects;
mod components {
    pub mod contact_form;
    pub mod loading_bar;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::loading_bar::LoadingBar;
use components::nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <LoadingBar />
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
