use crate::domain::address::capitalize_address;
use crate::reports::format::thousands;
use crate::stats::{DailyStat, MatchLink};
use chrono::NaiveDate;
use maud::{html, Markup};

/// The weekly rollup: per-day table, zero-match callout, full recap.
pub fn weekly_summary_body(stats: &[&DailyStat]) -> String {
    let zero_match_days: Vec<String> = stats
        .iter()
        .filter(|d| d.ntm_matches == 0 && d.health_matches == 0)
        .map(|d| d.date.to_string())
        .collect();

    html! {
        h2 { "Weekly Property Monitor Summary" }
        table border="1" cellpadding="5" cellspacing="0" {
            tr {
                th { "Date" }
                th { "Total Scanned" }
                th { "NTM Matches" }
                th { "Health Matches" }
            }
            @for day in stats {
                tr {
                    td { (day.date) }
                    td { (thousands(day.total_scanned as i64)) }
                    td { (day.ntm_matches) }
                    td { (day.health_matches) }
                }
            }
        }
        @if !zero_match_days.is_empty() {
            p { "Days with 0 matches: " (zero_match_days.join(", ")) }
        }
        (match_recap(stats))
    }
    .into_string()
}

fn match_recap(stats: &[&DailyStat]) -> Markup {
    let has_ntm = stats.iter().any(|d| !d.ntm_links.is_empty());
    let has_health = stats.iter().any(|d| !d.health_links.is_empty());

    html! {
        @if has_ntm || has_health {
            hr;
            h3 { "All Matches This Week" }
            @if has_ntm {
                h4 { "NTM-1 Matches" }
                ul {
                    @for day in stats {
                        @for link in &day.ntm_links { (recap_line(day.date, link)) }
                    }
                }
            }
            @if has_health {
                h4 { "Medical Office Matches" }
                ul {
                    @for day in stats {
                        @for link in &day.health_links { (recap_line(day.date, link)) }
                    }
                }
            }
        }
    }
}

fn recap_line(date: NaiveDate, link: &MatchLink) -> Markup {
    html! {
        li {
            (date) " — " (capitalize_address(&link.address)) " — "
            a href=(link.url) { "Zillow" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, scanned: usize, ntm: usize, health: usize) -> DailyStat {
        DailyStat {
            date: date.parse().unwrap(),
            total_scanned: scanned,
            ntm_matches: ntm,
            health_matches: health,
            ntm_links: (0..ntm)
                .map(|i| MatchLink {
                    address: format!("{i} main st"),
                    url: format!("http://www.zillow.com/homedetails/{i}"),
                })
                .collect(),
            health_links: Vec::new(),
        }
    }

    #[test]
    fn table_has_one_row_per_day() {
        let days = [day("2026-08-03", 120, 1, 0), day("2026-08-04", 98, 0, 0)];
        let refs: Vec<&DailyStat> = days.iter().collect();
        let body = weekly_summary_body(&refs);

        assert!(body.contains("2026-08-03"));
        assert!(body.contains("2026-08-04"));
        assert!(body.contains("120"));
    }

    #[test]
    fn zero_match_days_are_called_out() {
        let days = [day("2026-08-03", 120, 0, 0), day("2026-08-04", 98, 2, 0)];
        let refs: Vec<&DailyStat> = days.iter().collect();
        let body = weekly_summary_body(&refs);

        assert!(body.contains("Days with 0 matches: 2026-08-03"));
        assert!(!body.contains("Days with 0 matches: 2026-08-03, 2026-08-04"));
    }

    #[test]
    fn recap_lists_each_match_with_its_link() {
        let days = [day("2026-08-04", 98, 2, 0)];
        let refs: Vec<&DailyStat> = days.iter().collect();
        let body = weekly_summary_body(&refs);

        assert!(body.contains("All Matches This Week"));
        assert!(body.contains("0 Main ST"));
        assert!(body.contains("http://www.zillow.com/homedetails/1"));
    }

    #[test]
    fn no_recap_section_without_links() {
        let days = [day("2026-08-03", 50, 0, 0)];
        let refs: Vec<&DailyStat> = days.iter().collect();
        let body = weekly_summary_body(&refs);

        assert!(!body.contains("All Matches This Week"));
    }
}
