//! Snapshot types consumed by the dashboard layouts.
//!
//! Everything here is plain data. A snapshot is built once (from the
//! built-in sample or a JSON file) and replaced wholesale, never edited.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub due: String,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Task lifecycle bucket. The board always shows them in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Todo,
    InProgress,
    Done,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Todo, Stage::InProgress, Stage::Done];

    pub fn key(&self) -> &'static str {
        match self {
            Stage::Todo => "todo",
            Stage::InProgress => "in_progress",
            Stage::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    pub todo: Column,
    pub in_progress: Column,
    pub done: Column,
}

impl TaskBoard {
    pub fn column(&self, stage: Stage) -> &Column {
        match stage {
            Stage::Todo => &self.todo,
            Stage::InProgress => &self.in_progress,
            Stage::Done => &self.done,
        }
    }

    /// Columns in lifecycle order.
    pub fn columns(&self) -> impl Iterator<Item = (Stage, &Column)> + '_ {
        Stage::ALL.into_iter().map(move |stage| (stage, self.column(stage)))
    }

    /// Tasks not yet completed.
    pub fn open_count(&self) -> usize {
        self.todo.tasks.len() + self.in_progress.tasks.len()
    }

    pub fn done_count(&self) -> usize {
        self.done.tasks.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Standby,
    Blocked,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Standby => "Standby",
            AgentStatus::Blocked => "Blocked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub status: AgentStatus,
    pub focus: String,
    /// Percentage, conventionally 0..=100.
    pub load: u8,
    #[serde(default)]
    pub flair: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for StatValue {
    fn from(n: usize) -> Self {
        StatValue::Number(n as i64)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: StatValue,
    #[serde(default)]
    pub note: Option<String>,
}

impl StatCard {
    pub fn new(label: &str, value: impl Into<StatValue>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// Header copy shown above a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub card: Option<StatCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryData {
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<StatCard>,
    pub board: TaskBoard,
    #[serde(default)]
    pub summaries: Vec<DailySummary>,
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub symbol: String,
    /// Percent change, signed.
    pub change: f32,
    pub direction: Direction,
    pub flavor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Watch,
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Watch => "watch",
            Severity::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub time: String,
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub snippet: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    pub temperature: String,
    pub caption: String,
    /// Conventionally 0..=100.
    pub score: u8,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conviction {
    HighConviction,
    MomentumSnack,
    SpeculativeBite,
}

impl Conviction {
    pub fn label(&self) -> &'static str {
        match self {
            Conviction::HighConviction => "High Conviction",
            Conviction::MomentumSnack => "Momentum Snack",
            Conviction::SpeculativeBite => "Speculative Bite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPick {
    pub symbol: String,
    pub company: String,
    pub price: String,
    pub change: f32,
    pub flavor_note: String,
    pub conviction: Conviction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSpike {
    pub symbol: String,
    /// Percent of average volume.
    pub spike: u32,
    pub context: String,
    pub taste_profile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPicksData {
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<StatCard>,
    #[serde(default)]
    pub picks: Vec<StockPick>,
    pub market_mood: Mood,
    #[serde(default)]
    pub watchlist_heatmap: Vec<HeatmapCell>,
    #[serde(default)]
    pub snackable_insights: Vec<Insight>,
    #[serde(default)]
    pub volume_spikes: Vec<VolumeSpike>,
    #[serde(default)]
    pub next_bites: Vec<Alert>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    Raffle,
    FirstCome,
    MembersOnly,
}

impl EntryMethod {
    pub fn label(&self) -> &'static str {
        match self {
            EntryMethod::Raffle => "Raffle",
            EntryMethod::FirstCome => "First Come",
            EntryMethod::MembersOnly => "Members Only",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SneakerDrop {
    pub name: String,
    pub brand: String,
    pub colorway: String,
    pub release: String,
    pub retail: String,
    pub entry: EntryMethod,
    /// Conventionally 0..=100.
    pub hype: u8,
}

#[cfg(feature = "sneaker-drops")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SneakerDropsData {
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<StatCard>,
    #[serde(default)]
    pub drops: Vec<SneakerDrop>,
    pub hype_meter: Mood,
    #[serde(default)]
    pub resale_heatmap: Vec<HeatmapCell>,
    #[serde(default)]
    pub cop_tips: Vec<Insight>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// Full snapshot behind every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub primary: PrimaryData,
    pub stock_picks: StockPicksData,
    #[cfg(feature = "sneaker-drops")]
    pub sneaker_drops: SneakerDropsData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(id: &str) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            owner: "Primary".into(),
            due: "Feb 5".into(),
            priority: Priority::Low,
            tags: Vec::new(),
            notes: None,
        }
    }

    #[test]
    fn columns_follow_lifecycle_order() {
        let board = TaskBoard {
            todo: Column {
                title: "Up Next".into(),
                tasks: vec![task("a"), task("b")],
            },
            in_progress: Column {
                title: "In Progress".into(),
                tasks: vec![task("c")],
            },
            done: Column {
                title: "Completed".into(),
                tasks: vec![task("d")],
            },
        };
        let keys: Vec<_> = board.columns().map(|(stage, _)| stage.key()).collect();
        assert_eq!(keys, ["todo", "in_progress", "done"]);
        assert_eq!(board.open_count(), 3);
        assert_eq!(board.done_count(), 1);
    }

    #[test]
    fn stat_values_accept_numbers_and_text() {
        let cards: Vec<StatCard> = serde_json::from_value(json!([
            { "label": "Open Tasks", "value": 6 },
            { "label": "Pre-Open Preview", "value": "6:00 AM PT", "note": "Auto-refresh" }
        ]))
        .unwrap();
        assert_eq!(cards[0].value, StatValue::Number(6));
        assert_eq!(cards[1].value.to_string(), "6:00 AM PT");
        assert_eq!(cards[1].note.as_deref(), Some("Auto-refresh"));
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        let res: Result<Task, _> = serde_json::from_value(json!({
            "id": "x",
            "title": "x",
            "owner": "x",
            "due": "x",
            "priority": "urgent"
        }));
        assert!(res.is_err());
    }
}
