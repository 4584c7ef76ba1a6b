//! Surface-independent description of a rendered dashboard.
//!
//! Layouts produce a [`Page`]; the egui front end draws it and the
//! [`Display`](std::fmt::Display) impl prints it as plain text.

use crate::clock::Dateline;
use crate::dashboard::data::Stage;
use crate::dashboard::view::ViewMode;
use std::fmt;

/// Semantic colour of a badge or tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    Positive,
    Caution,
    Negative,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// A percentage drawn as a progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    pub value: f32,
    pub label: String,
}

impl Meter {
    /// Bar fill in `0.0..=1.0`. The label keeps the raw value.
    pub fn fraction(&self) -> f32 {
        (self.value / 100.0).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Option<Badge>,
    pub meta: Vec<String>,
    pub tags: Vec<String>,
    pub body: Option<String>,
    pub meter: Option<Meter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub stage: Stage,
    pub title: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledList {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    pub heading: String,
    pub lists: Vec<LabeledList>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatTile {
    pub label: String,
    pub value: String,
    pub caption: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    pub time: String,
    pub text: String,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Stats(Vec<StatTile>),
    Board(Vec<BoardColumn>),
    Summaries(Vec<SummaryBlock>),
    Cards(Vec<Card>),
    Heatmap(Vec<HeatTile>),
    Alerts(Vec<AlertRow>),
}

/// Horizontal space a section claims. Consecutive half sections share a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Span {
    #[default]
    Full,
    Half,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: Option<String>,
    pub span: Span,
    pub body: SectionBody,
}

impl Section {
    pub fn new(title: Option<&str>, body: SectionBody) -> Self {
        Self {
            title: title.map(str::to_string),
            span: Span::Full,
            body,
        }
    }

    pub fn half(mut self) -> Self {
        self.span = Span::Half;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroBlock {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub card: Option<StatTile>,
    pub dateline: Option<Dateline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub view: ViewMode,
    pub hero: HeroBlock,
    pub sections: Vec<Section>,
    pub footer: Vec<String>,
}

/// Groups sections into rows: a full section alone, half sections in pairs.
pub fn rows(sections: &[Section]) -> Vec<&[Section]> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < sections.len() {
        let pair = sections[i].span == Span::Half
            && sections.get(i + 1).map(|s| s.span) == Some(Span::Half);
        let len = if pair { 2 } else { 1 };
        out.push(&sections[i..i + len]);
        i += len;
    }
    out
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &Card) -> fmt::Result {
    write!(f, "- {}", card.title)?;
    if let Some(badge) = &card.badge {
        write!(f, " [{}]", badge.text)?;
    }
    writeln!(f)?;
    if let Some(sub) = &card.subtitle {
        writeln!(f, "  {sub}")?;
    }
    if !card.meta.is_empty() {
        writeln!(f, "  {}", card.meta.join(" · "))?;
    }
    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(f, "  {}", tags.join(" "))?;
    }
    if let Some(body) = &card.body {
        writeln!(f, "  {body}")?;
    }
    if let Some(meter) = &card.meter {
        writeln!(f, "  {}", meter.label)?;
    }
    Ok(())
}

fn write_stat(f: &mut fmt::Formatter<'_>, tile: &StatTile) -> fmt::Result {
    write!(f, "{}: {}", tile.label, tile.value)?;
    if let Some(note) = &tile.note {
        write!(f, " ({note})")?;
    }
    writeln!(f)
}

impl fmt::Display for SectionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionBody::Stats(tiles) => {
                for tile in tiles {
                    write_stat(f, tile)?;
                }
            }
            SectionBody::Board(columns) => {
                for column in columns {
                    writeln!(f, "## {} ({})", column.title, column.cards.len())?;
                    for card in &column.cards {
                        write_card(f, card)?;
                    }
                }
            }
            SectionBody::Summaries(blocks) => {
                for block in blocks {
                    writeln!(f, "## {}", block.heading)?;
                    for list in &block.lists {
                        writeln!(f, "{}:", list.label)?;
                        for item in &list.items {
                            writeln!(f, "  * {item}")?;
                        }
                    }
                }
            }
            SectionBody::Cards(cards) => {
                for card in cards {
                    write_card(f, card)?;
                }
            }
            SectionBody::Heatmap(tiles) => {
                for tile in tiles {
                    writeln!(f, "{} {} ({})", tile.label, tile.value, tile.caption)?;
                }
            }
            SectionBody::Alerts(alerts) => {
                for alert in alerts {
                    writeln!(f, "{} [{}] {}", alert.time, alert.badge.text, alert.text)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hero = &self.hero;
        writeln!(f, "{}", hero.eyebrow)?;
        writeln!(f, "== {} ==", hero.title)?;
        if let Some(line) = &hero.dateline {
            writeln!(f, "{}", line.condensed)?;
        }
        if !hero.subtitle.is_empty() {
            writeln!(f, "{}", hero.subtitle)?;
        }
        if let Some(card) = &hero.card {
            write_stat(f, card)?;
        }
        for section in &self.sections {
            writeln!(f)?;
            if let Some(title) = &section.title {
                writeln!(f, "-- {title} --")?;
            }
            write!(f, "{}", section.body)?;
        }
        if !self.footer.is_empty() {
            writeln!(f)?;
            for line in &self.footer {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Section {
        Section::new(Some("Stats"), SectionBody::Stats(Vec::new()))
    }

    #[test]
    fn meter_fraction_is_clamped() {
        let over = Meter {
            value: 140.0,
            label: "Load: 140%".into(),
        };
        let half = Meter {
            value: 50.0,
            label: String::new(),
        };
        assert_eq!(over.fraction(), 1.0);
        assert_eq!(half.fraction(), 0.5);
        assert_eq!(over.label, "Load: 140%");
    }

    #[test]
    fn half_sections_pair_up() {
        let sections = vec![stats(), stats().half(), stats().half(), stats().half()];
        let grouped: Vec<usize> = rows(&sections).iter().map(|r| r.len()).collect();
        assert_eq!(grouped, vec![1, 2, 1]);
    }

    #[test]
    fn cards_print_badge_meta_and_tags() {
        let body = SectionBody::Cards(vec![Card {
            title: "Ship it".into(),
            badge: Some(Badge::new("high", Tone::Negative)),
            meta: vec!["Owner: Primary".into(), "Due: Feb 5".into()],
            tags: vec!["ops".into()],
            ..Card::default()
        }]);
        assert_eq!(
            body.to_string(),
            "- Ship it [high]\n  Owner: Primary · Due: Feb 5\n  #ops\n"
        );
    }
}
