use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/food")]
    Food,
    #[at("/picture")]
    Picture,
    #[at("/404")]
    #[not_found]
    NotFound,
}
