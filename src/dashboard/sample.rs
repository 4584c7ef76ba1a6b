//! Built-in mock snapshot used when no data file is configured.

use super::data::*;
use once_cell::sync::Lazy;

/// Shared copy of [`DashboardData::sample`].
pub static SAMPLE_DATA: Lazy<DashboardData> = Lazy::new(DashboardData::sample);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn task(
    id: &str,
    title: &str,
    owner: &str,
    due: &str,
    priority: Priority,
    tags: &[&str],
    notes: &str,
) -> Task {
    Task {
        id: id.into(),
        title: title.into(),
        owner: owner.into(),
        due: due.into(),
        priority,
        tags: strings(tags),
        notes: Some(notes.into()),
    }
}

fn agent(name: &str, role: &str, status: AgentStatus, focus: &str, load: u8) -> Agent {
    Agent {
        name: name.into(),
        role: role.into(),
        status,
        focus: focus.into(),
        load,
        flair: None,
    }
}

fn cell(symbol: &str, change: f32, flavor: &str) -> HeatmapCell {
    HeatmapCell {
        symbol: symbol.into(),
        change,
        direction: if change < 0.0 {
            Direction::Down
        } else {
            Direction::Up
        },
        flavor: flavor.into(),
    }
}

fn insight(title: &str, snippet: &str, action: &str) -> Insight {
    Insight {
        title: title.into(),
        snippet: snippet.into(),
        action: action.into(),
    }
}

fn alert(time: &str, text: &str, severity: Severity) -> Alert {
    Alert {
        time: time.into(),
        text: text.into(),
        severity,
    }
}

fn board() -> TaskBoard {
    TaskBoard {
        todo: Column {
            title: "Up Next".into(),
            tasks: vec![
                task(
                    "todo-1",
                    "Powerball: finalize 50 + 50 number sets",
                    "Primary",
                    "Feb 5",
                    Priority::High,
                    &["lottery", "analysis"],
                    "Need Monterey-weighted logic + general mix before write-up lock.",
                ),
                task(
                    "todo-2",
                    "Daily memory backup → GitHub",
                    "Primary",
                    "Daily 22:00",
                    Priority::Medium,
                    &["ops"],
                    "Push snapshot into the memory-backups repo each evening.",
                ),
                task(
                    "todo-3",
                    "Joe’s Daily Stock Picks automation plan",
                    "Primary",
                    "Feb 5",
                    Priority::Medium,
                    &["stocks", "automation"],
                    "Wire 6:00 pre-open + 7:45 confirmation cadence into dashboard data layer.",
                ),
            ],
        },
        in_progress: Column {
            title: "In Progress".into(),
            tasks: vec![
                task(
                    "prog-1",
                    "Powerball insights write-up + number set QA",
                    "Primary",
                    "Feb 4",
                    Priority::High,
                    &["lottery", "report"],
                    "Charts locked; QA on 50+50 sets underway.",
                ),
                task(
                    "prog-2",
                    "Dashboard: sandwich toggle + Joe’s view",
                    "StackCanvas",
                    "Feb 5",
                    Priority::High,
                    &["dashboard", "UI"],
                    "Implement view switch + placeholders for stock widgets.",
                ),
                task(
                    "prog-3",
                    "Task board data refresh",
                    "Primary",
                    "Feb 4",
                    Priority::Medium,
                    &["dashboard"],
                    "Update board to reflect new assignments + cadence.",
                ),
            ],
        },
        done: Column {
            title: "Completed".into(),
            tasks: vec![
                task(
                    "done-1",
                    "Oil dividend playbook delivery",
                    "Primary",
                    "Feb 4",
                    Priority::Medium,
                    &["dividends"],
                    "Sent DOCX + MD via Telegram.",
                ),
                task(
                    "done-2",
                    "Cross-sector dividend spreadsheet refresh",
                    "Primary",
                    "Feb 4",
                    Priority::Medium,
                    &["dividends", "excel"],
                    "Per-payout view + cadence columns added.",
                ),
            ],
        },
    }
}

fn primary() -> PrimaryData {
    let board = board();
    let stats = vec![
        StatCard::new("Open Tasks", board.open_count()),
        StatCard::new("Completed Today", board.done_count()),
        StatCard::new("Focus Streams", 3usize),
    ];
    PrimaryData {
        hero: Hero {
            eyebrow: "Mission Control".into(),
            title: "Workstream Dashboard".into(),
            subtitle: "Live view of priorities, progress, and daily summaries.".into(),
            card: Some(
                StatCard::new("Powerball Report", "90% → polishing write-up + number sets")
                    .with_note("ETA ≈ 60 min (charts, 50+50 mixes, narrative)"),
            ),
        },
        stats,
        board,
        summaries: vec![DailySummary {
            date: "Wed • Feb 4, 2026".into(),
            highlights: strings(&[
                "Dividend playbooks (oil + cross-sector) delivered as DOCX, MD, and XLSX.",
                "Powerball dataset merged with jackpot location metadata; charts 80% styled.",
            ]),
            decisions: strings(&[
                "Migrated long scrapes to DigitalOcean droplet.",
                "Green-lit shared dashboard for team visibility.",
            ]),
            next_steps: strings(&[
                "Finish Powerball number simulations + Monterey overlays.",
                "Publish dashboard + link workflow in README.",
            ]),
        }],
        agents: vec![
            Agent {
                flair: Some("Gold Manager".into()),
                ..agent(
                    "Primary",
                    "Ops & Research Lead",
                    AgentStatus::Active,
                    "Powerball delivery + orchestration",
                    90,
                )
            },
            agent(
                "StackCanvas",
                "Dashboard Dev Lead",
                AgentStatus::Active,
                "Sandwich toggle + Joe’s stock widgets",
                70,
            ),
            agent(
                "SignalFire",
                "Data Viz Scout",
                AgentStatus::Standby,
                "Chart themes & layout experiments",
                20,
            ),
            agent(
                "Ledger",
                "Data Integrity Monitor",
                AgentStatus::Standby,
                "Dividend + task data QA hooks",
                10,
            ),
        ],
        footer: strings(&[
            "To edit tasks or summaries, point data_path in settings.json at a snapshot file \
             and reload.",
            "Future hooks: interactive forms, API-backed status feeds, chat webhooks.",
        ]),
    }
}

fn stock_picks() -> StockPicksData {
    StockPicksData {
        hero: Hero {
            eyebrow: "Joe’s Daily Stock Picks".into(),
            title: "Market Menu".into(),
            subtitle: "Pre-open picks, mood and flow, served fresh before the bell.".into(),
            card: Some(
                StatCard::new("Next Publish", "6:00 AM PT").with_note("7:45 AM PT validation pass"),
            ),
        },
        stats: vec![
            StatCard::new("Pre-Open Preview", "6:00 AM PT").with_note("Auto-refresh scheduled"),
            StatCard::new("First-Hour Update", "7:45 AM PT")
                .with_note("Validates volume + momentum"),
            StatCard::new("Hot Themes", "AI Chips · Defense · EV Supply"),
        ],
        picks: vec![
            StockPick {
                symbol: "TSM".into(),
                company: "Taiwan Semi".into(),
                price: "$325.70".into(),
                change: 3.2,
                flavor_note: "Chip supply + NVIDIA partnership chatter".into(),
                conviction: Conviction::HighConviction,
            },
            StockPick {
                symbol: "LMT".into(),
                company: "Lockheed Martin".into(),
                price: "$448.10".into(),
                change: 1.4,
                flavor_note: "Defense bill flows + international orders".into(),
                conviction: Conviction::MomentumSnack,
            },
            StockPick {
                symbol: "RIVN".into(),
                company: "Rivian".into(),
                price: "$23.95".into(),
                change: -0.8,
                flavor_note: "Speculative bounce ahead of delivery update".into(),
                conviction: Conviction::SpeculativeBite,
            },
        ],
        market_mood: Mood {
            temperature: "Warm & Watchful".into(),
            caption: "Futures green, but traders eye CPI preview.".into(),
            score: 68,
            tags: strings(&["Growth Tilt", "AI Flow", "Earnings Heavy"]),
        },
        watchlist_heatmap: vec![
            cell("NVDA", 2.1, "AI orderbook"),
            cell("AMD", 1.4, "MI300 demand"),
            cell("SMCI", -0.9, "Cooling chatter"),
            cell("PLTR", 4.8, "Gov cloud buzz"),
            cell("SPY", 0.3, "Broad risk-on"),
            cell("DIA", -0.2, "Dow lagging"),
        ],
        snackable_insights: vec![
            insight(
                "AI CapEx keeps ripping",
                "TSMC suppliers flag high-visibility orders through summer.",
                "Watch upstream silicon names.",
            ),
            insight(
                "Defense budget moves",
                "Appropriations vote pulled forward two days.",
                "Look for pre-market volume in primes.",
            ),
            insight(
                "EV tax-credit noise",
                "IRS guidance rumored tonight; expect volatility.",
                "Set alerts on TSLA, RIVN, GM.",
            ),
        ],
        volume_spikes: vec![
            VolumeSpike {
                symbol: "SOFI".into(),
                spike: 180,
                context: "Call volume 3x average after fintech summit".into(),
                taste_profile: "Retail latte".into(),
            },
            VolumeSpike {
                symbol: "BA".into(),
                spike: 145,
                context: "Headline risk on safety review".into(),
                taste_profile: "Turbulent bite".into(),
            },
            VolumeSpike {
                symbol: "META".into(),
                spike: 130,
                context: "Options flow into AI assistant rumors".into(),
                taste_profile: "Metaverse mocha".into(),
            },
        ],
        next_bites: vec![
            alert("05:45 AM", "ETL pull social + news sentiment", Severity::Info),
            alert("06:00 AM", "Pre-open picks publish", Severity::Info),
            alert("07:45 AM", "First-hour validation refresh", Severity::Watch),
        ],
    }
}

#[cfg(feature = "sneaker-drops")]
fn sneaker_drops() -> SneakerDropsData {
    SneakerDropsData {
        hero: Hero {
            eyebrow: "Drop Radar".into(),
            title: "Sneaker Drop Tracker".into(),
            subtitle: "Release calendar, hype readings and resale flow in one lane.".into(),
            card: Some(
                StatCard::new("Next Raffle Close", "Fri 9:00 AM PT")
                    .with_note("Two entries still pending"),
            ),
        },
        stats: vec![
            StatCard::new("Drops This Week", 4usize),
            StatCard::new("Raffles Entered", 3usize).with_note("1 confirmation outstanding"),
            StatCard::new("Hot Silhouettes", "Jordan 4 · Dunk Low · 990v6"),
        ],
        drops: vec![
            SneakerDrop {
                name: "Air Jordan 4 Retro".into(),
                brand: "Jordan".into(),
                colorway: "Military Blue".into(),
                release: "Sat 7:00 AM PT".into(),
                retail: "$215".into(),
                entry: EntryMethod::Raffle,
                hype: 92,
            },
            SneakerDrop {
                name: "Dunk Low".into(),
                brand: "Nike SB".into(),
                colorway: "Pacific Blue".into(),
                release: "Thu 7:00 AM PT".into(),
                retail: "$120".into(),
                entry: EntryMethod::FirstCome,
                hype: 74,
            },
            SneakerDrop {
                name: "990v6 Made in USA".into(),
                brand: "New Balance".into(),
                colorway: "Grey Day".into(),
                release: "Fri 8:00 AM ET".into(),
                retail: "$200".into(),
                entry: EntryMethod::MembersOnly,
                hype: 61,
            },
            SneakerDrop {
                name: "Gel-Kayano 14".into(),
                brand: "ASICS".into(),
                colorway: "Cream / Pure Silver".into(),
                release: "Sun 10:00 AM ET".into(),
                retail: "$150".into(),
                entry: EntryMethod::FirstCome,
                hype: 48,
            },
        ],
        hype_meter: Mood {
            temperature: "Heating Up".into(),
            caption: "Retro week pulls raffle traffic; general releases steady.".into(),
            score: 81,
            tags: strings(&["Retro Heavy", "Raffle Season", "Collab Quiet"]),
        },
        resale_heatmap: vec![
            cell("AJ4", 12.5, "Sizes 9-11 thin"),
            cell("DUNK", 4.2, "Steady bids"),
            cell("990", -3.1, "Restock rumors"),
            cell("KAYANO", 1.8, "Quiet climb"),
            cell("YZY", -6.4, "Supply glut"),
        ],
        cop_tips: vec![
            insight(
                "Split raffle entries",
                "Regional boutiques draw separately from the main app.",
                "Enter two boutiques per drop.",
            ),
            insight(
                "Check size runs early",
                "Half sizes sold through first on the last retro.",
                "Lock the backup size in the cart.",
            ),
        ],
        alerts: vec![
            alert("Thu 6:55 AM", "Dunk Low queue opens", Severity::Watch),
            alert("Fri 9:00 AM", "AJ4 raffle entries close", Severity::Alert),
            alert("Sat 6:30 AM", "Confirm payment cards on file", Severity::Info),
        ],
    }
}

impl DashboardData {
    /// The built-in mock snapshot.
    pub fn sample() -> Self {
        Self {
            primary: primary(),
            stock_picks: stock_picks(),
            #[cfg(feature = "sneaker-drops")]
            sneaker_drops: sneaker_drops(),
        }
    }
}
