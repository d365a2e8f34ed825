mod blocks;
mod emails;
mod format;
mod weekly;

pub use blocks::{containment_report, zoned_report};
pub use emails::{containment_email_body, error_alert_body, zoned_email_body};
pub use weekly::weekly_summary_body;
