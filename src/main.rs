use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod components {
    pub mod aurora_background;
    pub mod entrance;
    pub mod reveal;
}
mod pages {
    pub mod hero;
}

use pages::hero::{HeroDemo, HeroWithCta};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/demo")]
    Demo,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HeroWithCta /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <HeroDemo /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <HeroWithCta /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_to_hero_pages() {
        assert!(Route::recognize("/") == Some(Route::Home));
        assert!(Route::recognize("/demo") == Some(Route::Demo));
        assert!(Route::not_found_route() == Some(Route::NotFound));
        assert_eq!(Route::Demo.to_path(), "/demo");
    }
}
