use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use stylist::yew::Global;

mod nav;
mod effects;
mod styles;
mod components {
    pub mod stat_counter;
    pub mod impact_chart;
    pub mod materials_chart;
    pub mod early_access;
    pub mod loading;
}
mod pages {
    pub mod landing;
}

use nav::Nav;
use pages::landing::Landing;
use styles::EFFECT_STYLES;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={EFFECT_STYLES} />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
