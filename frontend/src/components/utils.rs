use gloo_file::File as GlooFile;
use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

use crate::api::ImageFile;

/// Current value of the `<input>` that fired the event.
pub fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// First image in the list, if any. Only one file is uploaded at a time.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| file.type_().starts_with("image/"))
        .map(GlooFile::from)
}

pub async fn read_image(file: GlooFile) -> Result<ImageFile, gloo_file::FileReadError> {
    let bytes = gloo_file::futures::read_as_bytes(&file).await?;
    Ok(ImageFile {
        name: file.name(),
        mime_type: file.raw_mime_type(),
        bytes,
    })
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn render_error_message(message: Option<&str>) -> Html {
    match message {
        Some(msg) => html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ msg }</p>
            </div>
        },
        None => html! {},
    }
}
