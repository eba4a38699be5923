use std::fmt::Display;

use crate::config::ClientConfig;

/// The two pages the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Login / registration page.
    Auth,
    /// Requires a session.
    Dashboard,
}

impl Page {
    pub fn path<'a>(&self, config: &'a ClientConfig) -> &'a str {
        match self {
            Page::Auth => &config.auth_path,
            Page::Dashboard => &config.dashboard_path,
        }
    }

    /// Resolves the current location. Anything that is not the dashboard
    /// is treated as the auth page.
    pub fn from_path(path: &str, config: &ClientConfig) -> Self {
        let dashboard = config.dashboard_path.trim_end_matches(".html");
        if path == config.dashboard_path || path.trim_end_matches('/') == dashboard {
            Page::Dashboard
        } else {
            Page::Auth
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Auth => write!(f, "auth"),
            Page::Dashboard => write!(f, "dashboard"),
        }
    }
}

pub trait Navigator {
    fn navigate(&self, page: Page);
}

/// Full page loads through `window.location`.
pub struct BrowserNavigator {
    config: ClientConfig,
}

impl BrowserNavigator {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn current_page(&self) -> Page {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Page::from_path(&path, &self.config)
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, page: Page) {
        let path = page.path(&self.config);
        log::info!("Navigating to {} ({})", page, path);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("Navigation to {} failed: {:?}", path, e);
            }
        }
    }
}
