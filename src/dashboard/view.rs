use serde::{Deserialize, Serialize};

/// Which dashboard is on screen.
///
/// The set is closed; every variant has exactly one layout in
/// [`render`](crate::dashboard::render::render). A view that does not exist
/// cannot be named:
///
/// ```compile_fail
/// use mission_control::dashboard::ViewMode;
/// let _ = ViewMode::Weather;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Primary,
    StockPicks,
    #[cfg(feature = "sneaker-drops")]
    SneakerDrops,
}

impl ViewMode {
    /// Every view in tab order.
    #[cfg(feature = "sneaker-drops")]
    pub const ALL: &'static [ViewMode] = &[
        ViewMode::Primary,
        ViewMode::StockPicks,
        ViewMode::SneakerDrops,
    ];
    /// Every view in tab order.
    #[cfg(not(feature = "sneaker-drops"))]
    pub const ALL: &'static [ViewMode] = &[ViewMode::Primary, ViewMode::StockPicks];

    pub fn key(&self) -> &'static str {
        match self {
            ViewMode::Primary => "primary",
            ViewMode::StockPicks => "stock_picks",
            #[cfg(feature = "sneaker-drops")]
            ViewMode::SneakerDrops => "sneaker_drops",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Primary => "Mission Control",
            ViewMode::StockPicks => "Joe’s Picks",
            #[cfg(feature = "sneaker-drops")]
            ViewMode::SneakerDrops => "Drop Radar",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ViewMode::Primary => "Tasks, agents & summaries",
            ViewMode::StockPicks => "Daily stock picks",
            #[cfg(feature = "sneaker-drops")]
            ViewMode::SneakerDrops => "Sneaker drop tracker",
        }
    }

    /// Parses a view key as written in settings or passed on the command line.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.key().eq_ignore_ascii_case(key))
    }

    /// View bound to the zero-based shortcut slot (Ctrl+1 is slot 0).
    pub fn from_shortcut_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One entry of the view switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOption {
    pub view: ViewMode,
    pub key: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub active: bool,
}

/// Owns the current view selection.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    current: ViewMode,
}

impl ViewController {
    pub fn new(initial: ViewMode) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> ViewMode {
        self.current
    }

    /// Switches to `view`. Returns `false` when it was already active.
    pub fn select(&mut self, view: ViewMode) -> bool {
        if self.current == view {
            return false;
        }
        tracing::debug!(from = self.current.key(), to = view.key(), "view selected");
        self.current = view;
        true
    }

    /// Switches by key. `None` if the key names no view.
    pub fn select_key(&mut self, key: &str) -> Option<bool> {
        ViewMode::from_key(key).map(|view| self.select(view))
    }

    pub fn options(&self) -> Vec<SwitchOption> {
        ViewMode::ALL
            .iter()
            .map(|&view| SwitchOption {
                view,
                key: view.key(),
                label: view.label(),
                subtitle: view.subtitle(),
                active: view == self.current,
            })
            .collect()
    }
}
