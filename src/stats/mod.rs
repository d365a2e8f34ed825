mod journal;

pub use journal::{is_summary_day, DailyStat, MatchLink, StatsJournal};
