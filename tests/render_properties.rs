use chrono::NaiveDate;
use mission_control::clock::FixedClock;
use mission_control::dashboard::data::{DashboardData, Priority, Task};
use mission_control::dashboard::page::SectionBody;
use mission_control::dashboard::{render, ViewController, ViewMode};

fn feb_5() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap())
}

fn board_titles(page: &mission_control::dashboard::Page) -> Vec<Vec<String>> {
    page.sections
        .iter()
        .find_map(|s| match &s.body {
            SectionBody::Board(columns) => Some(
                columns
                    .iter()
                    .map(|c| c.cards.iter().map(|card| card.title.clone()).collect())
                    .collect(),
            ),
            _ => None,
        })
        .expect("primary page has a board")
}

fn task(id: &str) -> Task {
    Task {
        id: id.into(),
        title: format!("Task {id}"),
        owner: "Primary".into(),
        due: "Feb 5".into(),
        priority: Priority::Low,
        tags: Vec::new(),
        notes: None,
    }
}

#[test]
fn rendering_is_deterministic() {
    let data = DashboardData::sample();
    for &view in ViewMode::ALL {
        let a = render(view, &data, &feb_5());
        let b = render(view, &data, &feb_5());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }
}

#[test]
fn injected_clock_drives_the_condensed_date() {
    let data = DashboardData::sample();
    let page = render(ViewMode::StockPicks, &data, &feb_5());
    let line = page.hero.dateline.as_ref().expect("stock picks show today");
    assert_eq!(line.condensed, "Thu • Feb 5 2026");
    assert_eq!(line.long, "Thursday, February 5, 2026");
    assert_eq!(line.iso, "2026-02-05");
    assert!(page.to_string().contains("Thu • Feb 5 2026"));
}

#[test]
fn column_order_follows_input_order() {
    let mut data = DashboardData::sample();
    data.primary.board.todo.tasks = vec![task("t1"), task("t2"), task("t3")];
    let page = render(ViewMode::Primary, &data, &feb_5());
    assert_eq!(board_titles(&page)[0], ["Task t1", "Task t2", "Task t3"]);

    data.primary.board.todo.tasks = vec![task("t3"), task("t1"), task("t2")];
    let page = render(ViewMode::Primary, &data, &feb_5());
    assert_eq!(board_titles(&page)[0], ["Task t3", "Task t1", "Task t2"]);
}

#[test]
fn primary_sample_has_expected_shape() {
    let data = DashboardData::sample();
    let page = render(ViewMode::Primary, &data, &feb_5());
    let SectionBody::Stats(stats) = &page.sections[0].body else {
        panic!("primary page opens with stats");
    };
    assert_eq!(stats.len(), 3);
    let columns = board_titles(&page);
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|c| (2..=3).contains(&c.len())));
    let text = page.to_string();
    assert!(text.contains("## Up Next (3)"));
    assert!(text.contains("- Powerball: finalize 50 + 50 number sets [high]"));
    assert!(text.contains("Load: 90%"));
}

#[test]
fn full_cycle_returns_to_identical_primary_render() {
    let data = DashboardData::sample();
    let clock = feb_5();
    let mut ctl = ViewController::default();
    let initial = render(ctl.current(), &data, &clock).to_string();

    for &view in ViewMode::ALL {
        ctl.select(view);
        let page = render(ctl.current(), &data, &clock);
        assert_eq!(page.view, view);
    }
    ctl.select(ViewMode::Primary);

    assert_eq!(ctl.current(), ViewMode::Primary);
    assert_eq!(render(ctl.current(), &data, &clock).to_string(), initial);
}
