//! The main 3x3 grid: places to visit plus the food-grid entrances.

use tabingo_game::{BingoState, CityConfig, FOOD_ENTRANCE_IDS, line_cells, main_progress};
use yew::prelude::*;

use crate::api::{CellImages, MainPlace};
use crate::components::{FlipCell, Grid, PhotoGallery, ProgressBar, UploadButton};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: BingoState,
    pub city: &'static CityConfig,
    #[prop_or_default]
    pub images: CellImages,
    #[prop_or_default]
    pub places: Vec<MainPlace>,
    /// `(cell id, data URL)` for a finished upload.
    pub on_add_photo: Callback<(String, String)>,
    /// `(cell id, photo index)` for a delete.
    pub on_remove_photo: Callback<(String, usize)>,
    /// A food-entrance cell was tapped.
    pub on_entrance_click: Callback<String>,
}

#[function_component(BingoPage)]
pub fn bingo_page(props: &Props) -> Html {
    let selected = use_state(|| None::<usize>);
    let city = props.city;
    let lit = line_cells(&props.state, city);
    let progress = main_progress(&props.state, city);

    let cells = city.main_cells.iter().enumerate().map(|(index, cell)| {
        let cell_state = props.state.main_cell(cell.id);
        let done = cell_state.is_some_and(|c| c.done);
        let photo = cell_state
            .and_then(|c| c.photos.first())
            .map(|p| AttrValue::from(p.clone()));
        let image_url = props
            .images
            .main
            .get(cell.id)
            .filter(|data| !data.image_url.is_empty())
            .map(|data| AttrValue::from(data.image_url.clone()));
        let hidden_tile = (!props.images.hidden_full.is_empty() && photo.is_none())
            .then(|| AttrValue::from(props.images.hidden_full.clone()));
        let onclick = if FOOD_ENTRANCE_IDS.contains(&cell.id) {
            let cb = props.on_entrance_click.clone();
            let id = cell.id;
            Callback::from(move |()| cb.emit(id.to_string()))
        } else {
            let selected = selected.clone();
            Callback::from(move |()| selected.set(Some(index)))
        };
        html! {
            <FlipCell key={cell.id} cell={*cell} done={done}
                photo={photo} image_url={image_url} hidden_tile={hidden_tile}
                highlighted={lit.contains(cell.id)}
                onclick={onclick} />
        }
    });

    html! {
        <section class="page page--bingo">
            <ProgressBar progress={progress} label={city.label} />
            <Grid>{ for cells }</Grid>
            { selected.as_ref().map_or_else(Html::default, |&index| {
                render_detail(props, index, {
                    let selected = selected.clone();
                    Callback::from(move |()| selected.set(None))
                })
            }) }
        </section>
    }
}

fn render_detail(props: &Props, index: usize, on_close: Callback<()>) -> Html {
    let Some(cell) = props.city.main_cells.get(index) else {
        return Html::default();
    };
    let cell_state = props.state.main_cell(cell.id);
    let photos: Vec<AttrValue> = cell_state
        .map(|c| c.photos.iter().cloned().map(AttrValue::from).collect())
        .unwrap_or_default();
    let at_capacity = cell_state.is_some_and(tabingo_game::CellState::at_capacity);
    let place = props.places.iter().find(|p| p.id == cell.id);
    // Curated place imagery wins; the bundled reference shot covers cells
    // the sheet has no record for yet.
    let reference_image = place
        .and_then(|p| (!p.image1.is_empty()).then(|| p.image1.clone()))
        .or_else(|| cell.image.map(crate::paths::asset_path));

    let on_add = {
        let cb = props.on_add_photo.clone();
        let id = cell.id;
        Callback::from(move |data_url: String| cb.emit((id.to_string(), data_url)))
    };
    let on_delete = {
        let cb = props.on_remove_photo.clone();
        let id = cell.id;
        Callback::from(move |photo_index: usize| cb.emit((id.to_string(), photo_index)))
    };
    let close = Callback::from(move |_: MouseEvent| on_close.emit(()));

    html! {
        <div class="cell-detail">
            <header class="cell-detail__header">
                <h2>{ cell.label }</h2>
                <button type="button" aria-label="Close" onclick={close}>{ "×" }</button>
            </header>
            { reference_image.map_or_else(Html::default, |src| html! {
                <img class="cell-detail__image" src={src} alt={cell.label} />
            }) }
            { cell.description.map_or_else(Html::default, |desc| html! { <p>{ desc }</p> }) }
            { place.map_or_else(Html::default, |place| html! {
                <p class="cell-detail__place">{ format!("{} · {}", place.name_kr, place.place) }</p>
            }) }
            { cell.map_query.map_or_else(Html::default, |query| html! {
                <a class="cell-detail__map" target="_blank" rel="noreferrer"
                    href={format!("https://www.google.com/maps/search/?api=1&query={query}")}>
                    { "🗺 Open in Maps" }
                </a>
            }) }
            { cell.booking_url.map_or_else(Html::default, |url| html! {
                <a class="cell-detail__booking" target="_blank" rel="noreferrer" href={url}>
                    { "🎫 Book tickets" }
                </a>
            }) }
            <UploadButton on_photo={on_add} disabled={at_capacity} />
            <PhotoGallery photos={photos} on_delete={on_delete}
                empty_hint="Take a photo here to flip the card" />
        </div>
    }
}
