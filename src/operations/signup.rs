// Auth Overlay
// Login / sign-up panel opened from "Get Started"

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Signup,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Signup => "Sign Up",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Social providers listed under the forms
pub const SOCIAL_PROVIDERS: &[&str] = &["Google", "Facebook", "Apple"];

#[derive(Debug, Clone)]
pub struct AuthOverlay {
    visible: bool,
    tab: AuthTab,
}

impl Default for AuthOverlay {
    fn default() -> Self {
        Self {
            visible: false,
            tab: AuthTab::Login,
        }
    }
}

impl AuthOverlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    /// "Get Started" always lands on the sign-up tab
    pub fn get_started(&mut self) {
        self.visible = true;
        self.tab = AuthTab::Signup;
        debug!("auth overlay opened on sign-up");
    }

    pub fn switch_tab(&mut self) {
        self.tab = self.tab.other();
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_started_opens_signup() {
        let mut overlay = AuthOverlay::default();
        assert!(!overlay.is_visible());

        overlay.get_started();
        assert!(overlay.is_visible());
        assert_eq!(overlay.tab(), AuthTab::Signup);

        overlay.switch_tab();
        assert_eq!(overlay.tab(), AuthTab::Login);

        overlay.close();
        overlay.get_started();
        assert_eq!(overlay.tab(), AuthTab::Signup);
    }
}
