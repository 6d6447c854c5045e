use tabingo_game::Progress;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub progress: Progress,
    #[prop_or_default]
    pub label: AttrValue,
}

/// Horizontal completion bar with the done/total count next to it.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &Props) -> Html {
    let pct = props.progress.pct();
    html! {
        <div class="progress" role="progressbar"
            aria-valuemin="0" aria-valuemax="100"
            aria-valuenow={pct.to_string()}
            aria-label={props.label.clone()}>
            <div class="progress__track">
                <div class="progress__fill" style={format!("width: {pct}%")}></div>
            </div>
            <span class="progress__count">
                { format!("{} / {}", props.progress.done, props.progress.total) }
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <ProgressBar progress={Progress { done: 3, total: 9 }} label="Main grid" />
        }
    }

    #[test]
    fn renders_rounded_percentage_width() {
        let html = block_on(LocalServerRenderer::<Harness>::new().render());
        assert!(html.contains("width: 33%"));
        assert!(html.contains("3 / 9"));
    }
}
