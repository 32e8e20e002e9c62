use leptos::*;

/// Style tokens shared by the dashboard components.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub divider_color: String,
    /// Base spacing in pixels.
    pub spacing_unit: u32,
    /// Width of the status rail in pixels.
    pub rail_width: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            divider_color: "rgba(0, 0, 0, 0.12)".to_string(),
            spacing_unit: 8,
            rail_width: 50,
        }
    }
}

impl Theme {
    pub fn spacing(&self, factor: u32) -> u32 {
        self.spacing_unit * factor
    }
}

/// Provide a theme to the component tree
pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

/// Current theme, or the default one when none was provided
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
