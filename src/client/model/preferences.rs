/// `localStorage` key holding the colour theme.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Script persisting the theme and applying it to the root `data-theme` attribute.
    pub fn apply_script(&self) -> String {
        format!(
            "localStorage.setItem('{key}', '{theme}'); document.documentElement.setAttribute('data-theme', '{theme}');",
            key = THEME_STORAGE_KEY,
            theme = self.as_str()
        )
    }

    pub fn load_script() -> String {
        format!("return localStorage.getItem('{}');", THEME_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stored_value_falls_back() {
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("solarized").unwrap_or_default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
