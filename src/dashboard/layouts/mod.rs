//! One layout per [`ViewMode`](crate::dashboard::ViewMode).
//!
//! Each layout is an order-preserving projection of its data slice into
//! page sections. Nothing is sorted or filtered here.

pub mod primary;
#[cfg(feature = "sneaker-drops")]
pub mod sneaker_drops;
pub mod stock_picks;

use crate::clock::Dateline;
#[cfg(feature = "sneaker-drops")]
use crate::dashboard::data::EntryMethod;
use crate::dashboard::data::{
    AgentStatus, Alert, Conviction, Direction, HeatmapCell, Hero, Insight, Mood, Priority,
    Severity, StatCard,
};
use crate::dashboard::page::{AlertRow, Badge, Card, HeatTile, HeroBlock, Meter, StatTile, Tone};

pub(crate) fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Negative,
        Priority::Medium => Tone::Caution,
        Priority::Low => Tone::Neutral,
    }
}

pub(crate) fn status_tone(status: AgentStatus) -> Tone {
    match status {
        AgentStatus::Active => Tone::Positive,
        AgentStatus::Standby => Tone::Caution,
        AgentStatus::Blocked => Tone::Negative,
    }
}

pub(crate) fn direction_tone(direction: Direction) -> Tone {
    match direction {
        Direction::Up => Tone::Positive,
        Direction::Down => Tone::Negative,
    }
}

pub(crate) fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::Info => Tone::Neutral,
        Severity::Watch => Tone::Caution,
        Severity::Alert => Tone::Negative,
    }
}

pub(crate) fn conviction_tone(conviction: Conviction) -> Tone {
    match conviction {
        Conviction::HighConviction => Tone::Accent,
        Conviction::MomentumSnack => Tone::Positive,
        Conviction::SpeculativeBite => Tone::Caution,
    }
}

#[cfg(feature = "sneaker-drops")]
pub(crate) fn entry_tone(entry: EntryMethod) -> Tone {
    match entry {
        EntryMethod::Raffle => Tone::Accent,
        EntryMethod::FirstCome => Tone::Caution,
        EntryMethod::MembersOnly => Tone::Neutral,
    }
}

/// `3.2` -> `+3.2%`, `-0.8` -> `-0.8%`.
pub fn signed_percent(change: f32) -> String {
    format!("{change:+.1}%")
}

pub(crate) fn stat_tile(card: &StatCard) -> StatTile {
    StatTile {
        label: card.label.clone(),
        value: card.value.to_string(),
        note: card.note.clone(),
    }
}

pub(crate) fn stat_tiles(cards: &[StatCard]) -> Vec<StatTile> {
    cards.iter().map(stat_tile).collect()
}

pub(crate) fn hero_block(hero: &Hero, dateline: Option<Dateline>) -> HeroBlock {
    HeroBlock {
        eyebrow: hero.eyebrow.clone(),
        title: hero.title.clone(),
        subtitle: hero.subtitle.clone(),
        card: hero.card.as_ref().map(stat_tile),
        dateline,
    }
}

pub(crate) fn heat_tiles(cells: &[HeatmapCell]) -> Vec<HeatTile> {
    cells
        .iter()
        .map(|cell| HeatTile {
            label: cell.symbol.clone(),
            value: signed_percent(cell.change),
            caption: cell.flavor.clone(),
            tone: direction_tone(cell.direction),
        })
        .collect()
}

pub(crate) fn insight_cards(insights: &[Insight]) -> Vec<Card> {
    insights
        .iter()
        .map(|insight| Card {
            title: insight.title.clone(),
            subtitle: Some(insight.snippet.clone()),
            body: Some(format!("→ {}", insight.action)),
            ..Card::default()
        })
        .collect()
}

pub(crate) fn alert_rows(alerts: &[Alert]) -> Vec<AlertRow> {
    alerts
        .iter()
        .map(|alert| AlertRow {
            time: alert.time.clone(),
            text: alert.text.clone(),
            badge: Badge::new(alert.severity.as_str(), severity_tone(alert.severity)),
        })
        .collect()
}

pub(crate) fn mood_card(mood: &Mood, meter_label: &str) -> Card {
    Card {
        title: mood.temperature.clone(),
        subtitle: Some(mood.caption.clone()),
        tags: mood.tags.clone(),
        meter: Some(Meter {
            value: f32::from(mood.score),
            label: format!("{meter_label}: {}/100", mood.score),
        }),
        ..Card::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_keeps_sign_and_one_decimal() {
        assert_eq!(signed_percent(3.2), "+3.2%");
        assert_eq!(signed_percent(-0.8), "-0.8%");
        assert_eq!(signed_percent(0.0), "+0.0%");
    }

    #[test]
    fn alert_badges_use_severity_names() {
        let rows = alert_rows(&[Alert {
            time: "07:45 AM".into(),
            text: "refresh".into(),
            severity: Severity::Watch,
        }]);
        assert_eq!(rows[0].badge, Badge::new("watch", Tone::Caution));
    }
}
