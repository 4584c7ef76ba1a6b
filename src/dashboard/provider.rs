use crate::dashboard::data::DashboardData;
use crate::dashboard::sample::SAMPLE_DATA;
use crate::settings::Settings;
use anyhow::Context;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// Holds the current snapshot and where it came from.
///
/// Snapshots are replaced wholesale by [`DataProvider::reload`]; the
/// `generation` counter increases on every replacement so views can tell
/// their cached pages are stale.
#[derive(Debug, Clone)]
pub struct DataProvider {
    source: Option<PathBuf>,
    snapshot: DashboardData,
    warnings: Vec<String>,
    generation: u64,
}

impl DataProvider {
    /// Provider over the built-in sample.
    pub fn builtin() -> Self {
        Self::with_snapshot(SAMPLE_DATA.clone())
    }

    /// Provider over an in-memory snapshot (fixtures, embedding).
    pub fn with_snapshot(snapshot: DashboardData) -> Self {
        let warnings = report(&snapshot);
        Self {
            source: None,
            snapshot,
            warnings,
            generation: 0,
        }
    }

    /// Loads a JSON snapshot. A missing or empty file yields the sample.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let snapshot = load_snapshot(path, true)?;
        let warnings = report(&snapshot);
        Ok(Self {
            source: Some(path.to_path_buf()),
            snapshot,
            warnings,
            generation: 0,
        })
    }

    /// Uses `data_path` from the settings, falling back to the sample when the
    /// file cannot be read or parsed.
    pub fn from_settings(settings: &Settings) -> Self {
        let Some(path) = settings.data_path.as_deref() else {
            return Self::builtin();
        };
        match Self::from_path(path) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!("failed to load dashboard data: {e:#}");
                let mut provider = Self::builtin();
                provider.source = Some(PathBuf::from(path));
                provider.warnings.push(format!("{e:#}; showing sample data"));
                provider
            }
        }
    }

    /// Re-reads the source file. A file that has disappeared is an error like
    /// any other; on error the current snapshot is kept.
    pub fn reload(&mut self) -> anyhow::Result<()> {
        let Some(path) = self.source.clone() else {
            return Ok(());
        };
        let snapshot = load_snapshot(&path, false)?;
        self.warnings = report(&snapshot);
        self.snapshot = snapshot;
        self.generation += 1;
        tracing::info!(
            path = %path.display(),
            generation = self.generation,
            "dashboard data reloaded"
        );
        Ok(())
    }

    pub fn snapshot(&self) -> &DashboardData {
        &self.snapshot
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Reads a snapshot file. An empty file yields the sample; so does a missing
/// one when `missing_ok` is set. Every other read failure is an error.
fn load_snapshot(path: &Path, missing_ok: bool) -> anyhow::Result<DashboardData> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if missing_ok && e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("read dashboard data {}", path.display()))
        }
    };
    if content.trim().is_empty() {
        tracing::debug!(path = %path.display(), "no dashboard data file; using sample");
        return Ok(SAMPLE_DATA.clone());
    }
    serde_json::from_str(&content)
        .with_context(|| format!("parse dashboard data {}", path.display()))
}

fn report(data: &DashboardData) -> Vec<String> {
    let warnings = validate(data);
    for w in &warnings {
        tracing::warn!("{w}");
    }
    warnings
}

fn over_100(warnings: &mut Vec<String>, what: &str, value: impl Into<u32>) {
    let value = value.into();
    if value > 100 {
        warnings.push(format!("{what} is {value}, expected 0-100"));
    }
}

/// Schema checks the type system cannot express.
pub fn validate(data: &DashboardData) -> Vec<String> {
    let mut warnings = Vec::new();
    let primary = &data.primary;

    let mut seen = HashSet::new();
    for (stage, column) in primary.board.columns() {
        if column.title.trim().is_empty() {
            warnings.push(format!("column '{}' has no title", stage.key()));
        }
        for task in &column.tasks {
            if !seen.insert(task.id.as_str()) {
                warnings.push(format!(
                    "task '{}' appears in more than one place (again in '{}')",
                    task.id,
                    stage.key()
                ));
            }
        }
    }

    for agent in &primary.agents {
        over_100(&mut warnings, &format!("load of agent '{}'", agent.name), agent.load);
    }
    over_100(
        &mut warnings,
        "market mood score",
        data.stock_picks.market_mood.score,
    );

    #[cfg(feature = "sneaker-drops")]
    {
        let sneakers = &data.sneaker_drops;
        over_100(&mut warnings, "hype meter score", sneakers.hype_meter.score);
        for drop in &sneakers.drops {
            over_100(&mut warnings, &format!("hype of '{}'", drop.name), drop.hype);
        }
    }

    warnings
}
