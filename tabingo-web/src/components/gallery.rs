use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub photos: Vec<AttrValue>,
    pub on_delete: Callback<usize>,
    #[prop_or_default]
    pub empty_hint: AttrValue,
}

/// Thumbnail strip of uploaded photos, each with a delete button.
#[function_component(PhotoGallery)]
pub fn photo_gallery(props: &Props) -> Html {
    if props.photos.is_empty() {
        return html! { <p class="gallery gallery--empty">{ props.empty_hint.clone() }</p> };
    }

    html! {
        <ul class="gallery">
            { for props.photos.iter().enumerate().map(|(index, photo)| {
                let on_delete = {
                    let cb = props.on_delete.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(index))
                };
                html! {
                    <li class="gallery__item" key={index}>
                        <img class="gallery__photo" src={photo.clone()} alt={format!("Photo {}", index + 1)} />
                        <button type="button" class="gallery__delete"
                            aria-label={format!("Delete photo {}", index + 1)}
                            onclick={on_delete}>
                            { "🗑" }
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}
