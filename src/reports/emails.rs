use crate::matching::{NTM_MAP_VIEWER, ZONING_MAP_VIEWER};
use crate::reports::blocks::{FIVE_UNIT_MIN_SQFT, FOUR_UNIT_MIN_SQFT};
use maud::{html, Markup};

/// NTM category email: report plus the reviewer cheat sheet.
pub fn containment_email_body(report: Markup) -> String {
    html! {
        h2 { "Matching Properties" }
        p { "Here are the matching properties found:" }
        (report)
        p { "Thank you!" }
        hr;
        h3 { "Cheat Sheet:" }
        ul {
            li {
                "Min Lot SF for 5 units: "
                span style="color:green;" { (FIVE_UNIT_MIN_SQFT) " SF" }
            }
            li {
                "Min Lot SF for 4 units: "
                span style="color:orange;" { (FOUR_UNIT_MIN_SQFT) " SF" }
            }
            li {
                "Search PCPAO: "
                a href="https://www.pcpao.gov/quick-search?qu=1" { "PCPAO Quick Search" }
            }
            li {
                "Link to NTM ordinance: "
                a href="https://cms5.revize.com/revize/stpete/Business/Planning%20&%20Zoning/Land%20Development/Ord%20540-H.pdf" {
                    "NTM Ordinance"
                }
            }
            li { "City Zoning Map: " a href=(ZONING_MAP_VIEWER) { "City Zoning Map" } }
            li { "NTM Zoning Map: " a href=(NTM_MAP_VIEWER) { "NTM Zoning Map" } }
        }
    }
    .into_string()
}

/// Medical-office category email: report only.
pub fn zoned_email_body(report: Markup) -> String {
    html! {
        h2 { "Matching Properties" }
        p { "Here are the matching properties found:" }
        (report)
        p { "Thank you!" }
        hr;
    }
    .into_string()
}

/// Error-alert email: the failure and its backtrace, preformatted.
pub fn error_alert_body(error: &str, backtrace: &str) -> String {
    html! {
        h2 { "Property Monitor Error" }
        p { "The property monitoring run failed:" }
        pre { (error) "\n\n" (backtrace) }
        p { "Please check the logs for details." }
    }
    .into_string()
}
