use yew::prelude::*;

/// State of the Analyze button. Only `Ready` accepts clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeButton {
    Ready,
    /// The chosen file is still being read into memory.
    Reading,
    Analyzing,
}

impl AnalyzeButton {
    pub fn from_flags(uploading: bool, reading: bool) -> Self {
        if uploading {
            AnalyzeButton::Analyzing
        } else if reading {
            AnalyzeButton::Reading
        } else {
            AnalyzeButton::Ready
        }
    }

    pub fn disabled(self) -> bool {
        self != AnalyzeButton::Ready
    }

    fn content(self) -> Html {
        match self {
            AnalyzeButton::Ready => {
                html! { <><i class="fa-solid fa-upload"></i>{" Analyze"}</> }
            }
            AnalyzeButton::Reading => {
                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Reading file..."}</> }
            }
            AnalyzeButton::Analyzing => {
                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
            }
        }
    }
}

pub fn render_upload_section(
    selected: Option<&str>,
    button: AnalyzeButton,
    on_change: Callback<Event>,
    on_upload: Callback<MouseEvent>,
) -> Html {
    html! {
        <section class="upload-section">
            <h2>{"Upload MRI Scan"}</h2>
            <input
                type="file"
                id="imageInput"
                accept="image/*"
                onchange={on_change}
            />
            if let Some(name) = selected {
                <p class="file-types">{ format!("Selected: {}", name) }</p>
            }
            <button
                id="uploadBtn"
                class="analyze-btn"
                onclick={on_upload}
                disabled={button.disabled()}
            >
                { button.content() }
            </button>
        </section>
    }
}
