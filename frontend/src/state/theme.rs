use leptos::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Active color theme for the whole application.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: create_rw_signal(theme),
        }
    }

    pub fn switch(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
        log::debug!("theme switched to {:?}", self.theme.get_untracked());
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_css_classes() {
        assert_eq!(Theme::Light.class_name(), "theme-light");
        assert_eq!(Theme::Dark.class_name(), "theme-dark");
    }

    #[test]
    fn test_switch_updates_signal() {
        let runtime = create_runtime();
        let state = ThemeState::default();
        state.switch();
        assert_eq!(state.theme.get_untracked(), Theme::Dark);
        state.switch();
        assert_eq!(state.theme.get_untracked(), Theme::Light);
        runtime.dispose();
    }
}
