use super::{
    alert_rows, conviction_tone, heat_tiles, hero_block, insight_cards, mood_card,
    signed_percent, stat_tiles,
};
use crate::clock::Dateline;
use crate::dashboard::data::{StockPick, StockPicksData, VolumeSpike};
use crate::dashboard::page::{Badge, Card, Page, Section, SectionBody};
use crate::dashboard::view::ViewMode;

fn pick_card(pick: &StockPick) -> Card {
    Card {
        title: format!("{} · {}", pick.symbol, pick.company),
        subtitle: Some(format!("{} ({})", pick.price, signed_percent(pick.change))),
        badge: Some(Badge::new(
            pick.conviction.label(),
            conviction_tone(pick.conviction),
        )),
        body: Some(pick.flavor_note.clone()),
        ..Card::default()
    }
}

fn spike_card(spike: &VolumeSpike) -> Card {
    Card {
        title: spike.symbol.clone(),
        subtitle: Some(format!("{}% of avg volume", spike.spike)),
        tags: vec![spike.taste_profile.clone()],
        body: Some(spike.context.clone()),
        ..Card::default()
    }
}

/// Joe's daily stock picks.
pub fn layout(data: &StockPicksData, today: Dateline) -> Page {
    let sections = vec![
        Section::new(None, SectionBody::Stats(stat_tiles(&data.stats))),
        Section::new(
            Some("Today’s Picks"),
            SectionBody::Cards(data.picks.iter().map(pick_card).collect()),
        ),
        Section::new(
            Some("Market Mood"),
            SectionBody::Cards(vec![mood_card(&data.market_mood, "Mood")]),
        )
        .half(),
        Section::new(
            Some("Watchlist Heatmap"),
            SectionBody::Heatmap(heat_tiles(&data.watchlist_heatmap)),
        )
        .half(),
        Section::new(
            Some("Snackable Insights"),
            SectionBody::Cards(insight_cards(&data.snackable_insights)),
        )
        .half(),
        Section::new(
            Some("Volume Spikes"),
            SectionBody::Cards(data.volume_spikes.iter().map(spike_card).collect()),
        )
        .half(),
        Section::new(
            Some("Next Bites"),
            SectionBody::Alerts(alert_rows(&data.next_bites)),
        ),
    ];

    Page {
        view: ViewMode::StockPicks,
        hero: hero_block(&data.hero, Some(today)),
        sections,
        footer: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::dashboard::data::{Conviction, DashboardData};
    use crate::dashboard::page::Tone;

    fn today() -> Dateline {
        Dateline::today(&FixedClock::ymd(2026, 2, 5).unwrap())
    }

    #[test]
    fn pick_card_formats_change_and_conviction() {
        let card = pick_card(&StockPick {
            symbol: "RIVN".into(),
            company: "Rivian".into(),
            price: "$23.95".into(),
            change: -0.8,
            flavor_note: "bounce".into(),
            conviction: Conviction::SpeculativeBite,
        });
        assert_eq!(card.title, "RIVN · Rivian");
        assert_eq!(card.subtitle.as_deref(), Some("$23.95 (-0.8%)"));
        assert_eq!(card.badge, Some(Badge::new("Speculative Bite", Tone::Caution)));
    }

    #[test]
    fn hero_carries_the_dateline() {
        let page = layout(&DashboardData::sample().stock_picks, today());
        let line = page.hero.dateline.expect("dateline");
        assert_eq!(line.condensed, "Thu • Feb 5 2026");
    }

    #[test]
    fn mood_meter_uses_score() {
        let page = layout(&DashboardData::sample().stock_picks, today());
        let SectionBody::Cards(cards) = &page.sections[2].body else {
            panic!("mood section should hold cards");
        };
        let meter = cards[0].meter.as_ref().expect("mood meter");
        assert_eq!(meter.label, "Mood: 68/100");
        assert!((meter.fraction() - 0.68).abs() < f32::EPSILON);
    }
}
