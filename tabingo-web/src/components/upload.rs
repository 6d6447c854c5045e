use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{FileReader, HtmlInputElement, ProgressEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Emitted once per selected file with the file's data URL.
    pub on_photo: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub multiple: bool,
    #[prop_or(AttrValue::Static("📷 Upload photo"))]
    pub label: AttrValue,
}

/// File-input button that reads selected images into data URLs.
#[function_component(UploadButton)]
pub fn upload_button(props: &Props) -> Html {
    let on_photo = props.on_photo.clone();
    let onchange = Callback::from(move |event: Event| {
        let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
            return;
        };
        if let Some(files) = input.files() {
            for index in 0..files.length() {
                if let Some(file) = files.get(index) {
                    read_as_data_url(&file, on_photo.clone());
                }
            }
        }
        // Allow re-selecting the same file.
        input.set_value("");
    });

    html! {
        <label class={classes!("upload", props.disabled.then_some("upload--disabled"))}>
            <input type="file" accept="image/*" style="display: none"
                multiple={props.multiple}
                disabled={props.disabled}
                onchange={onchange} />
            <span class="upload__label">{ props.label.clone() }</span>
        </label>
    }
}

fn read_as_data_url(file: &web_sys::File, on_loaded: Callback<String>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };
    let handle = reader.clone();
    let onloadend = Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
        if let Ok(result) = handle.result()
            && let Some(data_url) = result.as_string()
        {
            on_loaded.emit(data_url);
        }
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    // The closure must outlive the read; the reader keeps the only handle.
    onloadend.forget();
    if let Err(err) = reader.read_as_data_url(file) {
        log::warn!(
            "could not read photo file: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(Disabled)]
    fn disabled() -> Html {
        html! {
            <UploadButton on_photo={Callback::noop()} disabled=true label="Add" />
        }
    }

    #[test]
    fn disabled_button_carries_the_modifier_class() {
        let html = block_on(LocalServerRenderer::<Disabled>::new().render());
        assert!(html.contains("upload--disabled"));
        assert!(html.contains("Add"));
    }
}
