#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
use crate::router::Route;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    view::render_app(&app_state, route.as_ref(), navigator)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use yew::prelude::*;
    use yew::LocalServerRenderer;

    use crate::router::Route;

    #[function_component(ViewHarness)]
    fn view_harness() -> Html {
        let app_state = super::state::use_app_state();
        super::view::render_app(&app_state, Some(&Route::Home), None)
    }

    #[test]
    fn home_route_renders_the_grid_shell() {
        let html = block_on(LocalServerRenderer::<ViewHarness>::new().render());
        assert!(html.contains("Travel Bingo"));
        assert!(html.contains("flip-card"));
    }

    #[function_component(FoodHarness)]
    fn food_harness() -> Html {
        let app_state = super::state::use_app_state();
        super::view::render_app(&app_state, Some(&Route::Food), None)
    }

    #[test]
    fn food_route_renders_grid_and_album() {
        let html = block_on(LocalServerRenderer::<FoodHarness>::new().render());
        assert!(html.contains("Food grid"));
        assert!(html.contains("Free photos"));
    }
}
