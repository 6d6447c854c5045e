//! The hidden-picture reveal and the celebration video.
//!
//! Every completed main cell uncovers its fragment of the hidden picture;
//! two completed lines unlock the video flow.

use tabingo_game::{
    BingoState, CityConfig, completed_main_line_count, report::VIDEO_LINE_THRESHOLD,
    report_from_boxes, video_file_name,
};
use yew::prelude::*;

use crate::api::{CellImages, RemoteBingoReport, VideoStatus};
use crate::components::Grid;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: BingoState,
    pub city: &'static CityConfig,
    #[prop_or_default]
    pub images: CellImages,
    #[prop_or_default]
    pub user_id: Option<AttrValue>,
    #[prop_or_default]
    pub video: Option<VideoStatus>,
    #[prop_or_default]
    pub report: Option<RemoteBingoReport>,
    /// The visitor agreed to the video being produced.
    pub on_consent: Callback<()>,
    /// Poll the backend again for video readiness.
    pub on_refresh: Callback<()>,
}

#[function_component(PicturePage)]
pub fn picture_page(props: &Props) -> Html {
    let city = props.city;
    let local_lines = completed_main_line_count(&props.state, city);
    // The backend only knows about logged box numbers; re-derive its line
    // view locally so the two never disagree on what a line means.
    let remote_lines = props.report.as_ref().map(|report| {
        report_from_boxes(city, report.completed_boxes.iter().copied()).line_count()
    });
    let unlocked = local_lines >= VIDEO_LINE_THRESHOLD
        || remote_lines.is_some_and(|count| count >= VIDEO_LINE_THRESHOLD);

    let all_done = city
        .main_cells
        .iter()
        .all(|cell| props.state.main_cell(cell.id).is_some_and(|c| c.done));

    let tiles = city.main_cells.iter().map(|cell| {
        let done = props.state.main_cell(cell.id).is_some_and(|c| c.done);
        let style = if done && !props.images.hidden_full.is_empty() {
            format!(
                "background-image: url('{}'); background-position: {}; background-size: {}",
                props.images.hidden_full, cell.hidden_pos, cell.hidden_size
            )
        } else {
            format!("background: {}", cell.grad)
        };
        html! {
            <div key={cell.id}
                class={classes!("picture-tile", done.then_some("picture-tile--revealed"))}
                style={style}>
            </div>
        }
    });

    html! {
        <section class="page page--picture">
            if all_done && !props.images.hidden_full.is_empty() {
                <img class="picture-full" src={props.images.hidden_full.clone()}
                    alt="The hidden picture" />
            } else {
                <Grid class="grid3--picture">{ for tiles }</Grid>
            }
            <p class="picture-lines">
                { format!("{local_lines} line(s) on this device") }
                { remote_lines.map_or_else(Html::default, |count| html! {
                    <span>{ format!(" · {count} line(s) on record") }</span>
                }) }
            </p>
            { render_video(props, unlocked) }
        </section>
    }
}

fn render_video(props: &Props, unlocked: bool) -> Html {
    if !unlocked {
        return html! {
            <p class="video-hint">
                { format!("Complete {VIDEO_LINE_THRESHOLD} lines to unlock your trip video.") }
            </p>
        };
    }

    if let Some(status) = &props.video
        && status.ready
        && let Some(url) = &status.video_url
    {
        return html! {
            <video class="video-player" src={url.clone()} controls=true></video>
        };
    }

    let consent = {
        let cb = props.on_consent.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let expected = props
        .user_id
        .as_ref()
        .map(|user| video_file_name(user, props.city.id));

    html! {
        <div class="video-pending">
            <p>{ "Two lines! Your celebration video is on its way." }</p>
            { expected.map_or_else(Html::default, |name| html! {
                <p class="video-pending__file">{ name }</p>
            }) }
            <button type="button" onclick={consent}>{ "🎬 Make my video" }</button>
            <button type="button" onclick={refresh}>{ "Check again" }</button>
        </div>
    }
}
