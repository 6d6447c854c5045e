//! The food sub-grid and the free photo album.

use tabingo_game::{
    BingoState, CityConfig, FreePhotoAlbum, completed_food_lines, food_progress,
    is_food_bingo_complete,
};
use yew::prelude::*;

use crate::api::{CellImages, FoodPlace};
use crate::components::{FlipCell, Grid, PhotoGallery, ProgressBar, UploadButton};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: BingoState,
    pub city: &'static CityConfig,
    #[prop_or_default]
    pub images: CellImages,
    #[prop_or_default]
    pub album: FreePhotoAlbum,
    #[prop_or_default]
    pub food_places: Vec<FoodPlace>,
    /// `(food index, data URL)` for a finished upload.
    pub on_add_photo: Callback<(usize, String)>,
    /// `(food index, photo index)` for a delete.
    pub on_remove_photo: Callback<(usize, usize)>,
    pub on_add_free: Callback<String>,
    pub on_remove_free: Callback<usize>,
}

#[function_component(FoodPage)]
pub fn food_page(props: &Props) -> Html {
    let selected = use_state(|| None::<usize>);
    let progress = food_progress(&props.state);
    let lines = completed_food_lines(&props.state);
    let bingo = is_food_bingo_complete(&props.state);

    let cells = props.city.food_cells.iter().enumerate().map(|(index, cell)| {
        let cell_state = props.state.food_cell(index);
        let done = cell_state.is_some_and(|c| c.done);
        let photo = cell_state
            .and_then(|c| c.photos.first())
            .map(|p| AttrValue::from(p.clone()));
        let image_url = props
            .images
            .food
            .get(cell.id)
            .filter(|data| !data.image_url.is_empty())
            .map(|data| AttrValue::from(data.image_url.clone()));
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |()| selected.set(Some(index)))
        };
        html! {
            <FlipCell key={cell.id} cell={*cell} done={done}
                photo={photo} image_url={image_url}
                onclick={onclick} />
        }
    });

    html! {
        <section class="page page--food">
            <ProgressBar progress={progress} label="Food grid" />
            <p class="food-lines">
                { format!("{lines} line(s) complete") }
                if bingo {
                    <strong>{ " · Food bingo! The entrance cells are yours." }</strong>
                }
            </p>
            <Grid class="grid3--food">{ for cells }</Grid>
            { selected.as_ref().map_or_else(Html::default, |&index| render_detail(props, index)) }
            { render_album(props) }
        </section>
    }
}

fn render_detail(props: &Props, index: usize) -> Html {
    let Some(cell) = props.city.food_cells.get(index) else {
        return Html::default();
    };
    let cell_state = props.state.food_cell(index);
    let photos: Vec<AttrValue> = cell_state
        .map(|c| c.photos.iter().cloned().map(AttrValue::from).collect())
        .unwrap_or_default();
    let at_capacity = cell_state.is_some_and(tabingo_game::CellState::at_capacity);
    // Curated recommendations for this box, best priority first.
    let mut recommendations: Vec<&FoodPlace> = props
        .food_places
        .iter()
        .filter(|place| place.area == props.city.id && place.r#box == (index + 1).to_string())
        .collect();
    recommendations.sort_by_key(|place| place.priority);

    let on_add = {
        let cb = props.on_add_photo.clone();
        Callback::from(move |data_url: String| cb.emit((index, data_url)))
    };
    let on_delete = {
        let cb = props.on_remove_photo.clone();
        Callback::from(move |photo_index: usize| cb.emit((index, photo_index)))
    };

    html! {
        <div class="cell-detail">
            <h2>{ cell.label }</h2>
            { cell.description.map_or_else(Html::default, |desc| html! { <p>{ desc }</p> }) }
            <ul class="cell-detail__recommendations">
                { for recommendations.iter().take(3).map(|place| html! {
                    <li key={place.name_en.clone()}>
                        if place.url.is_empty() {
                            { format!("{} ({})", place.name_en, place.name_kr) }
                        } else {
                            <a href={place.url.clone()} target="_blank" rel="noreferrer">
                                { format!("{} ({})", place.name_en, place.name_kr) }
                            </a>
                        }
                    </li>
                }) }
            </ul>
            <UploadButton on_photo={on_add} disabled={at_capacity} />
            <PhotoGallery photos={photos} on_delete={on_delete}
                empty_hint="Snap this dish to mark the square" />
        </div>
    }
}

fn render_album(props: &Props) -> Html {
    let photos: Vec<AttrValue> = props
        .album
        .photos()
        .iter()
        .cloned()
        .map(AttrValue::from)
        .collect();
    let on_add = props.on_add_free.clone();
    html! {
        <div class="free-album">
            <h2>{ "Free photos" }</h2>
            <p>{ format!("{} slot(s) left", props.album.remaining_slots()) }</p>
            <UploadButton on_photo={Callback::from(move |p| on_add.emit(p))}
                disabled={!props.album.can_upload()}
                multiple=true
                label="📷 Add free photo" />
            <PhotoGallery photos={photos} on_delete={props.on_remove_free.clone()}
                empty_hint="Anything else worth remembering goes here" />
        </div>
    }
}
