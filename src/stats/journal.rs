use crate::matching::MatchRecord;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{error, info, warn};

/// A matched address and its listing link, kept for the weekly recap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLink {
    pub address: String,
    pub url: String,
}

/// One run's summary, appended to the journal after every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub total_scanned: usize,
    pub ntm_matches: usize,
    pub health_matches: usize,
    #[serde(default)]
    pub ntm_links: Vec<MatchLink>,
    #[serde(default)]
    pub health_links: Vec<MatchLink>,
}

impl DailyStat {
    pub fn from_run(
        date: NaiveDate,
        total_scanned: usize,
        ntm: &[MatchRecord],
        health: &[MatchRecord],
    ) -> Self {
        let links = |records: &[MatchRecord]| {
            records
                .iter()
                .map(|r| MatchLink {
                    address: r.listing.address.clone(),
                    url: r.listing.detail_url.clone(),
                })
                .collect()
        };

        DailyStat {
            date,
            total_scanned,
            ntm_matches: ntm.len(),
            health_matches: health.len(),
            ntm_links: links(ntm),
            health_links: links(health),
        }
    }
}

pub fn is_summary_day(today: NaiveDate, summary_weekday: Weekday) -> bool {
    today.weekday() == summary_weekday
}

/// Append-only journal over a single JSON array file, rewritten whole
/// on every append. A crash mid-write can lose the file; accepted at
/// this scale, runs are never concurrent.
pub struct StatsJournal {
    path: String,
}

impl StatsJournal {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// A missing or unreadable journal is an empty one; stats are
    /// best-effort and must not block a run.
    pub fn load(&self) -> Vec<DailyStat> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("stats file {} is corrupt, starting over: {e}", self.path);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    pub fn append(&self, stat: DailyStat) -> Result<(), String> {
        let mut stats = self.load();
        stats.push(stat);
        self.write(&stats)
    }

    pub fn clear(&self) -> Result<(), String> {
        self.write(&[])
    }

    fn write(&self, stats: &[DailyStat]) -> Result<(), String> {
        let text = serde_json::to_string_pretty(stats).map_err(|e| e.to_string())?;
        fs::write(&self.path, text).map_err(|e| format!("{}: {e}", self.path))
    }

    /// Build and send the weekly rollup over the trailing seven days.
    /// The journal is cleared only after `send` reports success; a
    /// failed send keeps every stat for the next attempt.
    pub fn send_weekly_summary<F, E>(&self, today: NaiveDate, send: F)
    where
        F: FnOnce(&str, String) -> Result<(), E>,
        E: std::fmt::Display,
    {
        let stats = self.load();
        if stats.is_empty() {
            info!("no daily stats recorded, skipping weekly summary");
            return;
        }

        let week_ago = today - chrono::Duration::days(7);
        let recent: Vec<&DailyStat> = stats.iter().filter(|s| s.date >= week_ago).collect();
        if recent.is_empty() {
            info!("no stats in the trailing week, skipping weekly summary");
            return;
        }

        let subject = format!(
            "Weekly Property Monitor Summary - {}",
            today.format("%m/%d/%y")
        );
        let body = crate::reports::weekly_summary_body(&recent);

        match send(&subject, body) {
            Ok(()) => {
                info!("weekly summary sent, clearing stats journal");
                if let Err(e) = self.clear() {
                    error!("failed to clear stats journal: {e}");
                }
            }
            Err(e) => error!("weekly summary send failed, keeping stats: {e}"),
        }
    }
}
