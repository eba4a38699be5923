use gloo_file::ObjectUrl;
use yew::prelude::*;

/// The object URL is revoked when the handle is dropped, so replacing the
/// stored preview releases the previous one.
pub fn render_preview_area(preview: Option<&ObjectUrl>) -> Html {
    html! {
        <div id="preview">
            if let Some(url) = preview {
                <img src={url.to_string()} alt="Preview" />
            }
        </div>
    }
}
