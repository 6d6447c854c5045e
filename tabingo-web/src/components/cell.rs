use tabingo_game::CellConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cell: CellConfig,
    pub done: bool,
    /// The visitor's own photo, shown on the flipped face when present.
    #[prop_or_default]
    pub photo: Option<AttrValue>,
    /// Organizer-managed reference image for the front face.
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    /// This cell's fragment of the hidden picture, revealed when done.
    #[prop_or_default]
    pub hidden_tile: Option<AttrValue>,
    /// Part of a completed line.
    #[prop_or_default]
    pub highlighted: bool,
    pub onclick: Callback<()>,
}

/// One square of a 3x3 grid, rendered as a flip card. The front face shows
/// the place; completing the cell flips it over to the visitor's photo or
/// the hidden-picture fragment.
#[function_component(FlipCell)]
pub fn flip_cell(props: &Props) -> Html {
    let cell = props.cell;
    let onclick = {
        let cb = props.onclick.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let card_class = classes!(
        "flip-card",
        props.done.then_some("flip-card--flipped"),
        props.highlighted.then_some("flip-card--line"),
    );

    let front_style = props.image_url.as_ref().map_or_else(
        || format!("background: {}", cell.grad),
        |url| format!("background-image: url('{url}'); background-size: cover"),
    );
    let back = if let Some(photo) = &props.photo {
        html! { <img class="flip-card__photo" src={photo.clone()} alt={cell.label} /> }
    } else if let Some(tile) = &props.hidden_tile {
        let style = format!(
            "background-image: url('{tile}'); background-position: {}; background-size: {}",
            cell.hidden_pos, cell.hidden_size
        );
        html! { <div class="flip-card__hidden" style={style}></div> }
    } else {
        html! { <div class="flip-card__done">{ "✓" }</div> }
    };

    html! {
        <button type="button" class={card_class} onclick={onclick} aria-pressed={props.done.to_string()}>
            <div class="flip-card__inner">
                <div class="flip-card__front" style={front_style}>
                    <span class="flip-card__icon">{ cell.icon }</span>
                    <span class="flip-card__label">{ cell.label }</span>
                    if !cell.sub.is_empty() {
                        <span class="flip-card__sub">{ cell.sub }</span>
                    }
                </div>
                <div class="flip-card__back">{ back }</div>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use tabingo_game::city;
    use yew::LocalServerRenderer;

    #[function_component(OpenCell)]
    fn open_cell() -> Html {
        let cell = city("osaka").unwrap().main_cells[0];
        html! { <FlipCell cell={cell} done={false} onclick={Callback::noop()} /> }
    }

    #[function_component(DoneCell)]
    fn done_cell() -> Html {
        let cell = city("osaka").unwrap().main_cells[0];
        html! {
            <FlipCell cell={cell} done={true}
                photo={AttrValue::from("data:image/png;base64,xyz")}
                onclick={Callback::noop()} />
        }
    }

    #[test]
    fn open_cell_shows_the_front_face() {
        let html = block_on(LocalServerRenderer::<OpenCell>::new().render());
        assert!(!html.contains("flip-card--flipped"));
        assert!(html.contains("flip-card__front"));
    }

    #[test]
    fn done_cell_flips_to_the_photo() {
        let html = block_on(LocalServerRenderer::<DoneCell>::new().render());
        assert!(html.contains("flip-card--flipped"));
        assert!(html.contains("data:image/png;base64,xyz"));
    }
}
