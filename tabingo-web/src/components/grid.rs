use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// 3x3 layout container for the bingo cells.
#[function_component(Grid)]
pub fn grid(props: &Props) -> Html {
    html! {
        <div class={classes!("grid3", props.class.clone())} role="grid">
            { for props.children.iter() }
        </div>
    }
}
