//! Wires `AppState` into page props and gameplay callbacks.

use tabingo_game::{BingoAction, video_file_name};
use yew::prelude::*;
use yew_router::navigator::Navigator;

use crate::app::state::AppState;
use crate::pages::{BingoPage, FoodPage, NotFound, PicturePage};
use crate::router::Route;
use crate::{api, logger};

pub fn render_app(
    app_state: &AppState,
    route: Option<&Route>,
    navigator: Option<Navigator>,
) -> Html {
    let body = match route.unwrap_or(&Route::Home) {
        Route::Home => render_bingo(app_state, navigator.clone()),
        Route::Food => render_food(app_state),
        Route::Picture => render_picture(app_state),
        Route::NotFound => {
            let on_go_home = go_to(navigator.clone(), Route::Home);
            html! { <NotFound on_go_home={on_go_home} /> }
        }
    };

    html! {
        <div class="app">
            { render_header(app_state, navigator) }
            <main class="app__body">{ body }</main>
        </div>
    }
}

fn render_header(app_state: &AppState, navigator: Option<Navigator>) -> Html {
    let city = app_state.engine.city();
    let city_buttons = tabingo_game::CITIES.iter().map(|entry| {
        let on_pick = {
            let app_state = app_state.clone();
            let id = entry.id;
            Callback::from(move |_: MouseEvent| {
                app_state.set_city(id);
                if let Err(err) = crate::dom::replace_query_param("city", Some(id)) {
                    log::warn!(
                        "could not rewrite ?city=: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            })
        };
        html! {
            <button type="button" key={entry.id}
                class={classes!("app__city", (entry.id == city.id).then_some("app__city--active"))}
                onclick={on_pick}>
                { entry.label }
            </button>
        }
    });
    html! {
        <header class="app__header">
            <h1 class="app__title">{ format!("Travel Bingo · {}", city.label) }</h1>
            <div class="app__cities">{ for city_buttons }</div>
            <nav class="app__nav">
                <button type="button" onclick={click(go_to(navigator.clone(), Route::Home))}>
                    { "Grid" }
                </button>
                <button type="button" onclick={click(go_to(navigator.clone(), Route::Food))}>
                    { "Food" }
                </button>
                <button type="button" onclick={click(go_to(navigator, Route::Picture))}>
                    { "Picture" }
                </button>
            </nav>
        </header>
    }
}

fn render_bingo(app_state: &AppState, navigator: Option<Navigator>) -> Html {
    let engine = &app_state.engine;
    let city = engine.city();

    let on_add_photo = {
        let app_state = app_state.clone();
        Callback::from(move |(id, photo): (String, String)| {
            let city = app_state.engine.city();
            let box_number = city
                .main_cells
                .iter()
                .position(|cell| cell.id == id)
                .map(|index| index + 1);
            app_state.dispatch(&BingoAction::AddPhotoMain {
                id: id.clone(),
                photo,
            });
            logger::log_event(
                app_state.user_id_str().as_deref(),
                app_state.session_id_str().as_deref(),
                logger::EVENT_PHOTO_UPLOAD,
                serde_json::json!({
                    "box_number": box_number,
                    "cell_id": id,
                    "city": city.id,
                }),
            );
        })
    };
    let on_remove_photo = {
        let app_state = app_state.clone();
        Callback::from(move |(id, index): (String, usize)| {
            app_state.dispatch(&BingoAction::RemovePhotoMain { id, index });
        })
    };
    let on_entrance_click = {
        let app_state = app_state.clone();
        Callback::from(move |id: String| {
            let city = app_state.engine.city();
            // Kyoto's center entrance is a tutorial square: a tap completes
            // it without a photo. Every other entrance opens the food grid.
            let is_tutorial_center = city.id == "kyoto"
                && city.main_cells.get(4).is_some_and(|cell| cell.id == id);
            if is_tutorial_center {
                app_state.dispatch(&BingoAction::UploadMain {
                    id,
                    photo: String::new(),
                });
            } else if let Some(navigator) = &navigator {
                navigator.push(&Route::Food);
            }
        })
    };

    html! {
        <BingoPage state={engine.state().clone()} city={city}
            images={app_state.city_images()}
            places={(*app_state.main_places).clone()}
            on_add_photo={on_add_photo}
            on_remove_photo={on_remove_photo}
            on_entrance_click={on_entrance_click} />
    }
}

fn render_food(app_state: &AppState) -> Html {
    let engine = &app_state.engine;
    let on_add_photo = {
        let app_state = app_state.clone();
        Callback::from(move |(index, photo): (usize, String)| {
            app_state.dispatch(&BingoAction::AddPhotoFood { index, photo });
            logger::log_event(
                app_state.user_id_str().as_deref(),
                app_state.session_id_str().as_deref(),
                logger::EVENT_PHOTO_UPLOAD,
                serde_json::json!({
                    "grid": "food",
                    "index": index,
                    "city": app_state.engine.city().id,
                }),
            );
        })
    };
    let on_remove_photo = {
        let app_state = app_state.clone();
        Callback::from(move |(cell, index): (usize, usize)| {
            app_state.dispatch(&BingoAction::RemovePhotoFood { cell, index });
        })
    };
    let on_add_free = {
        let app_state = app_state.clone();
        Callback::from(move |photo: String| app_state.add_free_photo(photo))
    };
    let on_remove_free = {
        let app_state = app_state.clone();
        Callback::from(move |index: usize| app_state.remove_free_photo(index))
    };

    html! {
        <FoodPage state={engine.state().clone()} city={engine.city()}
            images={app_state.city_images()}
            album={engine.album().clone()}
            food_places={(*app_state.food_places).clone()}
            on_add_photo={on_add_photo}
            on_remove_photo={on_remove_photo}
            on_add_free={on_add_free}
            on_remove_free={on_remove_free} />
    }
}

fn render_picture(app_state: &AppState) -> Html {
    let engine = &app_state.engine;
    let on_refresh = refresh_video(app_state);
    let on_consent = {
        let app_state = app_state.clone();
        let refresh = on_refresh.clone();
        Callback::from(move |()| {
            let expected = app_state
                .user_id_str()
                .map(|user| video_file_name(&user, app_state.engine.city().id));
            logger::log_event(
                app_state.user_id_str().as_deref(),
                app_state.session_id_str().as_deref(),
                logger::EVENT_VIDEO_CONSENT,
                serde_json::json!({
                    "city": app_state.engine.city().id,
                    "expected_file": expected,
                }),
            );
            refresh.emit(());
        })
    };

    html! {
        <PicturePage state={engine.state().clone()} city={engine.city()}
            images={app_state.city_images()}
            user_id={(*app_state.user_id).clone()}
            video={(*app_state.video).clone()}
            report={(*app_state.report).clone()}
            on_consent={on_consent}
            on_refresh={on_refresh} />
    }
}

fn refresh_video(app_state: &AppState) -> Callback<()> {
    let app_state = app_state.clone();
    Callback::from(move |()| {
        let Some(user_id) = app_state.user_id_str() else {
            return;
        };
        let city_id = app_state.engine.city().id;
        let video = app_state.video.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_video_status(&user_id, city_id).await {
                Ok(status) => video.set(Some(status)),
                Err(err) => log::warn!(
                    "video status unavailable: {}",
                    crate::dom::js_error_message(&err)
                ),
            }
        });
    })
}

fn go_to(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&route);
        }
    })
}

fn click(cb: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| cb.emit(()))
}
