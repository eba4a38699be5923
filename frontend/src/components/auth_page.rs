use shared::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseStateSetter;
use yew::prelude::*;

use super::header::render_auth_header;
use super::utils::input_value;
use crate::flows::guard::redirect_if_authenticated;
use crate::flows::login::submit_login;
use crate::flows::register::{RegisterView, submit_registration};
use crate::flows::tabs::{AuthTab, TabState};
use crate::flows::{FormStatus, StatusView};
use crate::services::Services;

#[derive(Clone)]
struct LoginStatus(UseStateSetter<Option<FormStatus>>);

impl StatusView for LoginStatus {
    fn show_status(&self, status: FormStatus) {
        self.0.set(Some(status));
    }
}

#[derive(Clone)]
struct RegisterForm {
    status: UseStateSetter<Option<FormStatus>>,
    email: UseStateSetter<String>,
    username: UseStateSetter<String>,
    password: UseStateSetter<String>,
    tabs: UseStateSetter<TabState>,
    login_email: UseStateSetter<String>,
}

impl StatusView for RegisterForm {
    fn show_status(&self, status: FormStatus) {
        self.status.set(Some(status));
    }
}

impl RegisterView for RegisterForm {
    fn reset_fields(&self) {
        self.email.set(String::new());
        self.username.set(String::new());
        self.password.set(String::new());
    }

    fn switch_to_login(&self, email: &str) {
        let mut tabs = TabState::default();
        tabs.show_tab(AuthTab::Login);
        self.tabs.set(tabs);
        self.login_email.set(email.to_string());
    }
}

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| state.set(input_value(e)))
}

fn render_status(id: &'static str, status: Option<&FormStatus>) -> Html {
    match status {
        Some(status) => html! {
            <div id={id} class={classes!("message", status.class())}>{ status.message() }</div>
        },
        None => html! { <div id={id} class="message"></div> },
    }
}

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let services = use_context::<Services>();
    let tabs = use_state(TabState::default);
    let login_email = use_state(String::new);
    let login_password = use_state(String::new);
    let login_status = use_state(|| None::<FormStatus>);
    let register_email = use_state(String::new);
    let register_username = use_state(String::new);
    let register_password = use_state(String::new);
    let register_status = use_state(|| None::<FormStatus>);

    {
        let services = services.clone();
        use_effect_with((), move |_| {
            if let Some(services) = services {
                redirect_if_authenticated(&services);
            }
            || ()
        });
    }

    let Some(services) = services else {
        log::error!("Auth page rendered without services");
        return html! {};
    };

    let show_tab = |target: AuthTab| {
        let tabs = tabs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *tabs;
            next.show_tab(target);
            tabs.set(next);
        })
    };

    let on_login = {
        let services = services.clone();
        let login_email = login_email.clone();
        let login_password = login_password.clone();
        let view = LoginStatus(login_status.setter());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = LoginRequest {
                email: (*login_email).clone(),
                password: (*login_password).clone(),
            };
            let services = services.clone();
            let view = view.clone();
            spawn_local(async move {
                let _ = submit_login(&services, &view, credentials).await;
            });
        })
    };

    let on_register = {
        let services = services.clone();
        let account = RegisterRequest {
            email: (*register_email).clone(),
            username: (*register_username).clone(),
            password: (*register_password).clone(),
        };
        let view = RegisterForm {
            status: register_status.setter(),
            email: register_email.setter(),
            username: register_username.setter(),
            password: register_password.setter(),
            tabs: tabs.setter(),
            login_email: login_email.setter(),
        };
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let services = services.clone();
            let view = view.clone();
            let account = account.clone();
            spawn_local(async move {
                let _ = submit_registration(&services, &view, account).await;
            });
        })
    };

    let login_busy = (*login_status).as_ref().is_some_and(FormStatus::is_pending);
    let register_busy = (*register_status).as_ref().is_some_and(FormStatus::is_pending);

    html! {
        <div class="container">
            { render_auth_header() }
            <main class="auth-container">
                <div class="tabs">
                    <button
                        class={classes!("tab-btn", tabs.class_for(AuthTab::Login))}
                        onclick={show_tab(AuthTab::Login)}
                    >
                        {"Login"}
                    </button>
                    <button
                        class={classes!("tab-btn", tabs.class_for(AuthTab::Register))}
                        onclick={show_tab(AuthTab::Register)}
                    >
                        {"Register"}
                    </button>
                </div>

                <div id="login-form" class={classes!("auth-form", tabs.class_for(AuthTab::Login))}>
                    <form id="loginForm" onsubmit={on_login}>
                        <input
                            type="email"
                            id="login-email"
                            placeholder="Email"
                            required=true
                            value={(*login_email).clone()}
                            oninput={bind(&login_email)}
                        />
                        <input
                            type="password"
                            id="login-password"
                            placeholder="Password"
                            required=true
                            value={(*login_password).clone()}
                            oninput={bind(&login_password)}
                        />
                        <button type="submit" class="analyze-btn" disabled={login_busy}>
                            {"Login"}
                        </button>
                    </form>
                    { render_status("login-message", (*login_status).as_ref()) }
                </div>

                <div id="register-form" class={classes!("auth-form", tabs.class_for(AuthTab::Register))}>
                    <form id="registerForm" onsubmit={on_register}>
                        <input
                            type="email"
                            id="register-email"
                            placeholder="Email"
                            required=true
                            value={(*register_email).clone()}
                            oninput={bind(&register_email)}
                        />
                        <input
                            type="text"
                            id="register-username"
                            placeholder="Username"
                            required=true
                            value={(*register_username).clone()}
                            oninput={bind(&register_username)}
                        />
                        <input
                            type="password"
                            id="register-password"
                            placeholder="Password"
                            required=true
                            value={(*register_password).clone()}
                            oninput={bind(&register_password)}
                        />
                        <button type="submit" class="analyze-btn" disabled={register_busy}>
                            {"Register"}
                        </button>
                    </form>
                    { render_status("register-message", (*register_status).as_ref()) }
                </div>
            </main>
        </div>
    }
}
