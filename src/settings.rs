use crate::dashboard::ViewMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives log output in addition to stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Key of the view shown at startup. Unknown keys fall back to the
    /// primary dashboard.
    #[serde(default)]
    pub default_view: Option<String>,
    /// JSON snapshot replacing the built-in sample data.
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub theme: ThemeMode,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Initial window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            default_view: None,
            data_path: None,
            theme: ThemeMode::default(),
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            window_size: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// View shown when the app starts.
    pub fn initial_view(&self) -> ViewMode {
        if let Some(key) = &self.default_view {
            match ViewMode::from_key(key) {
                Some(view) => return view,
                None => {
                    tracing::warn!(
                        "provided default_view '{}' is not a known view; using primary",
                        key
                    );
                }
            }
        }
        ViewMode::Primary
    }
}
