use crate::clock::{Clock, Dateline};
use crate::dashboard::data::DashboardData;
use crate::dashboard::layouts;
use crate::dashboard::page::Page;
use crate::dashboard::view::ViewMode;

/// Builds the page for `view` from the snapshot.
///
/// Same view, data and date always give the same page. The clock is only
/// read by layouts that print today's date.
pub fn render(view: ViewMode, data: &DashboardData, clock: &dyn Clock) -> Page {
    match view {
        ViewMode::Primary => layouts::primary::layout(&data.primary),
        ViewMode::StockPicks => {
            layouts::stock_picks::layout(&data.stock_picks, Dateline::today(clock))
        }
        #[cfg(feature = "sneaker-drops")]
        ViewMode::SneakerDrops => {
            layouts::sneaker_drops::layout(&data.sneaker_drops, Dateline::today(clock))
        }
    }
}

/// Plain-text form of every view, in tab order.
pub fn render_all_text(data: &DashboardData, clock: &dyn Clock) -> String {
    ViewMode::ALL
        .iter()
        .map(|&view| render(view, data, clock).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn page_reports_the_view_it_was_built_for() {
        let data = DashboardData::sample();
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap());
        for &view in ViewMode::ALL {
            assert_eq!(render(view, &data, &clock).view, view);
        }
    }

    #[test]
    fn primary_ignores_the_clock() {
        let data = DashboardData::sample();
        let a = render(
            ViewMode::Primary,
            &data,
            &FixedClock(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap()),
        );
        let b = render(
            ViewMode::Primary,
            &data,
            &FixedClock(NaiveDate::from_ymd_opt(2030, 7, 1).unwrap()),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn text_dump_covers_every_view() {
        let data = DashboardData::sample();
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap());
        let text = render_all_text(&data, &clock);
        assert!(text.contains("== Workstream Dashboard =="));
        assert!(text.contains("== Market Menu =="));
        assert!(text.contains("Thu • Feb 5 2026"));
    }
}
