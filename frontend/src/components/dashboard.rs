use gloo_file::{Blob, ObjectUrl};
use shared::User;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::functional::UseStateSetter;
use yew::prelude::*;

use super::header::render_header;
use super::preview_area::render_preview_area;
use super::results::{render_history, render_result, render_statistics};
use super::upload_section::{AnalyzeButton, render_upload_section};
use super::utils::{alert, first_image_file, read_image, render_error_message};
use crate::api::ImageFile;
use crate::flows::guard::{DashboardView, enter_dashboard, logout};
use crate::flows::history::{HistoryRender, HistoryView};
use crate::flows::statistics::{StatisticsRender, StatisticsView};
use crate::flows::upload::{UploadFlow, UploadRender, UploadView};
use crate::services::Services;

/// Write side of the dashboard state, handed to the flows.
#[derive(Clone)]
struct DashboardHandles {
    user: UseStateSetter<Option<User>>,
    preview: UseStateSetter<Option<ObjectUrl>>,
    upload: UseStateSetter<Option<UploadRender>>,
    history: UseStateSetter<Option<HistoryRender>>,
    statistics: UseStateSetter<Option<StatisticsRender>>,
}

impl DashboardView for DashboardHandles {
    fn show_user(&self, user: &User) {
        self.user.set(Some(user.clone()));
    }
}

impl UploadView for DashboardHandles {
    fn show_preview(&self, image: &ImageFile) {
        let blob = Blob::new_with_options(image.bytes.as_slice(), Some(image.mime_type.as_str()));
        self.preview.set(Some(ObjectUrl::from(blob)));
    }

    fn render_upload(&self, render: UploadRender) {
        self.upload.set(Some(render));
    }

    fn notify(&self, message: &str) {
        alert(message);
    }
}

impl HistoryView for DashboardHandles {
    fn render_history(&self, render: HistoryRender) {
        self.history.set(Some(render));
    }
}

impl StatisticsView for DashboardHandles {
    fn render_statistics(&self, render: StatisticsRender) {
        self.statistics.set(Some(render));
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub services: Services,
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    match use_context::<Services>() {
        Some(services) => html! { <Dashboard {services} /> },
        None => render_error_message(Some("Dashboard rendered without services")),
    }
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let services = props.services.clone();
    let user = use_state(|| None::<User>);
    let preview = use_state(|| None::<ObjectUrl>);
    let upload = use_state(|| None::<UploadRender>);
    let history = use_state(|| None::<HistoryRender>);
    let statistics = use_state(|| None::<StatisticsRender>);
    let selected = use_state(|| None::<String>);
    let uploading = use_state(|| false);
    let reading = use_state(|| false);

    let handles = DashboardHandles {
        user: user.setter(),
        preview: preview.setter(),
        upload: upload.setter(),
        history: history.setter(),
        statistics: statistics.setter(),
    };

    let flow = {
        let services = services.clone();
        let handles = handles.clone();
        use_memo((), move |_| {
            UploadFlow::new(services, Rc::new(handles.clone()), Rc::new(handles))
        })
    };

    {
        let services = services.clone();
        let handles = handles.clone();
        let flow = flow.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                enter_dashboard(&services, &handles, &flow, &handles, &handles).await;
            });
            || ()
        });
    }

    let on_change = {
        let flow = flow.clone();
        let selected = selected.clone();
        let reading = reading.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().as_ref().and_then(first_image_file) else {
                flow.select(None);
                selected.set(None);
                return;
            };
            let flow = flow.clone();
            let selected = selected.clone();
            let reading = reading.clone();
            reading.set(true);
            spawn_local(async move {
                match read_image(file).await {
                    Ok(image) => {
                        selected.set(Some(image.name.clone()));
                        flow.select(Some(image));
                    }
                    Err(e) => {
                        log::error!("Failed to read selected file: {:?}", e);
                        flow.select(None);
                        selected.set(None);
                    }
                }
                reading.set(false);
            });
        })
    };

    let on_upload = {
        let flow = flow.clone();
        let uploading = uploading.clone();
        Callback::from(move |_: MouseEvent| {
            let flow = flow.clone();
            let uploading = uploading.clone();
            spawn_local(async move {
                uploading.set(true);
                let _ = flow.trigger().await;
                uploading.set(false);
            });
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| logout(&services));

    html! {
        <div class="container">
            { render_header((*user).as_ref(), on_logout) }
            <main class="main-content">
                { render_upload_section(
                    (*selected).as_deref(),
                    AnalyzeButton::from_flags(*uploading, *reading),
                    on_change,
                    on_upload,
                ) }
                { render_preview_area((*preview).as_ref()) }
                { render_result((*upload).as_ref()) }
                { render_statistics((*statistics).as_ref()) }
                { render_history((*history).as_ref()) }
            </main>
        </div>
    }
}
