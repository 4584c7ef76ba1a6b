use super::{
    alert_rows, entry_tone, heat_tiles, hero_block, insight_cards, mood_card, stat_tiles,
};
use crate::clock::Dateline;
use crate::dashboard::data::{SneakerDrop, SneakerDropsData};
use crate::dashboard::page::{Badge, Card, Meter, Page, Section, SectionBody};
use crate::dashboard::view::ViewMode;

fn drop_card(drop: &SneakerDrop) -> Card {
    Card {
        title: drop.name.clone(),
        subtitle: Some(format!("{} · {}", drop.brand, drop.colorway)),
        badge: Some(Badge::new(drop.entry.label(), entry_tone(drop.entry))),
        meta: vec![
            format!("Release: {}", drop.release),
            format!("Retail: {}", drop.retail),
        ],
        meter: Some(Meter {
            value: f32::from(drop.hype),
            label: format!("Hype: {}%", drop.hype),
        }),
        ..Card::default()
    }
}

/// Release calendar and resale flow.
pub fn layout(data: &SneakerDropsData, today: Dateline) -> Page {
    let sections = vec![
        Section::new(None, SectionBody::Stats(stat_tiles(&data.stats))),
        Section::new(
            Some("Upcoming Drops"),
            SectionBody::Cards(data.drops.iter().map(drop_card).collect()),
        ),
        Section::new(
            Some("Hype Meter"),
            SectionBody::Cards(vec![mood_card(&data.hype_meter, "Hype")]),
        )
        .half(),
        Section::new(
            Some("Resale Heatmap"),
            SectionBody::Heatmap(heat_tiles(&data.resale_heatmap)),
        )
        .half(),
        Section::new(
            Some("Cop Tips"),
            SectionBody::Cards(insight_cards(&data.cop_tips)),
        ),
        Section::new(Some("Drop Alerts"), SectionBody::Alerts(alert_rows(&data.alerts))),
    ];

    Page {
        view: ViewMode::SneakerDrops,
        hero: hero_block(&data.hero, Some(today)),
        sections,
        footer: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::data::{DashboardData, EntryMethod};
    use crate::dashboard::page::Tone;

    #[test]
    fn drop_card_lists_release_and_retail() {
        let card = drop_card(&SneakerDrop {
            name: "Dunk Low".into(),
            brand: "Nike SB".into(),
            colorway: "Pacific Blue".into(),
            release: "Thu 7:00 AM PT".into(),
            retail: "$120".into(),
            entry: EntryMethod::FirstCome,
            hype: 74,
        });
        assert_eq!(card.subtitle.as_deref(), Some("Nike SB · Pacific Blue"));
        assert_eq!(card.meta, vec!["Release: Thu 7:00 AM PT", "Retail: $120"]);
        assert_eq!(card.badge, Some(Badge::new("First Come", Tone::Caution)));
    }

    #[test]
    fn drops_keep_input_order() {
        let mut data = DashboardData::sample().sneaker_drops;
        data.drops.reverse();
        let date = chrono::NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        let page = layout(&data, Dateline::from_date(date));
        let SectionBody::Cards(cards) = &page.sections[1].body else {
            panic!("drops section should hold cards");
        };
        let names: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<_> = data.drops.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, expected);
    }
}
