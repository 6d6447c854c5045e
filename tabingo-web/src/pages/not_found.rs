use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Lost?" }</h1>
            <p>{ "This page is not on the grid." }</p>
            <button type="button" onclick={go_home}>
                { "Back to the bingo board" }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(Harness)]
    fn harness() -> Html {
        html! { <NotFound on_go_home={Callback::noop()} /> }
    }

    #[test]
    fn renders_a_way_back_home() {
        let html = block_on(LocalServerRenderer::<Harness>::new().render());
        assert!(html.contains("Back to the bingo board"));
    }
}
