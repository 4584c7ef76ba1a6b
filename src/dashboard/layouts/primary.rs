use super::{hero_block, priority_tone, stat_tiles, status_tone};
use crate::dashboard::data::{Agent, DailySummary, PrimaryData, Task, TaskBoard};
use crate::dashboard::page::{
    Badge, BoardColumn, Card, LabeledList, Meter, Page, Section, SectionBody, SummaryBlock,
};
use crate::dashboard::view::ViewMode;

fn task_card(task: &Task) -> Card {
    Card {
        title: task.title.clone(),
        badge: Some(Badge::new(
            task.priority.as_str(),
            priority_tone(task.priority),
        )),
        meta: vec![format!("Owner: {}", task.owner), format!("Due: {}", task.due)],
        tags: task.tags.clone(),
        body: task.notes.clone(),
        ..Card::default()
    }
}

fn board_columns(board: &TaskBoard) -> Vec<BoardColumn> {
    board
        .columns()
        .map(|(stage, column)| BoardColumn {
            stage,
            title: column.title.clone(),
            cards: column.tasks.iter().map(task_card).collect(),
        })
        .collect()
}

fn summary_block(summary: &DailySummary) -> SummaryBlock {
    let list = |label: &str, items: &[String]| LabeledList {
        label: label.to_string(),
        items: items.to_vec(),
    };
    SummaryBlock {
        heading: summary.date.clone(),
        lists: vec![
            list("Highlights", &summary.highlights),
            list("Decisions", &summary.decisions),
            list("Next Steps", &summary.next_steps),
        ],
    }
}

fn agent_card(agent: &Agent) -> Card {
    Card {
        title: agent.name.clone(),
        subtitle: Some(agent.role.clone()),
        badge: Some(Badge::new(agent.status.label(), status_tone(agent.status))),
        tags: agent.flair.iter().cloned().collect(),
        body: Some(agent.focus.clone()),
        meter: Some(Meter {
            value: f32::from(agent.load),
            label: format!("Load: {}%", agent.load),
        }),
        ..Card::default()
    }
}

/// Task board, daily summaries and agent roster.
pub fn layout(data: &PrimaryData) -> Page {
    let sections = vec![
        Section::new(None, SectionBody::Stats(stat_tiles(&data.stats))),
        Section::new(None, SectionBody::Board(board_columns(&data.board))),
        Section::new(
            Some("Daily Summaries"),
            SectionBody::Summaries(data.summaries.iter().map(summary_block).collect()),
        )
        .half(),
        Section::new(
            Some("Sub-Agent Roster"),
            SectionBody::Cards(data.agents.iter().map(agent_card).collect()),
        )
        .half(),
    ];

    Page {
        view: ViewMode::Primary,
        hero: hero_block(&data.hero, None),
        sections,
        footer: data.footer.clone(),
    }
}
