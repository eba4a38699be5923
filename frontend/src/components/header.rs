use shared::User;
use yew::prelude::*;

/// Renders the dashboard header with the signed-in user and a logout control.
pub fn render_header(user: Option<&User>, on_logout: Callback<MouseEvent>) -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-brain"></i> {" Brain Tumor Detection"}</h1>
            <div class="user-info">
                {
                    match user {
                        Some(user) => html! {
                            <div class="user-details">
                                <span id="userEmail" class="user-email">{ &user.email }</span>
                                if let Some(name) = &user.username {
                                    <span class="user-name">{ name }</span>
                                }
                            </div>
                        },
                        None => html! {
                            <div class="user-details">
                                <i class="fa-solid fa-spinner fa-spin"></i>
                            </div>
                        },
                    }
                }
                <button class="logout-button" onclick={on_logout} title="Logout">
                    <i class="fa-solid fa-sign-out-alt"></i>
                    {" Logout"}
                </button>
            </div>
        </header>
    }
}

pub fn render_auth_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-brain"></i> {" Brain Tumor Detection"}</h1>
            <p class="subtitle">{"Sign in to analyze MRI scans"}</p>
        </header>
    }
}
