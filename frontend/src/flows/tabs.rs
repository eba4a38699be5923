use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Which of the two auth forms is visible.
///
/// Exactly one tab and its form are active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: AuthTab,
}

impl TabState {
    #[cfg(test)]
    pub fn active(&self) -> AuthTab {
        self.active
    }

    pub fn show_tab(&mut self, target: AuthTab) {
        self.active = target;
    }

    pub fn is_active(&self, tab: AuthTab) -> bool {
        self.active == tab
    }

    /// CSS class for a tab button or its form.
    pub fn class_for(&self, tab: AuthTab) -> &'static str {
        if self.is_active(tab) { "active" } else { "" }
    }
}
