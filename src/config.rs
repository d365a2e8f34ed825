// src/config.rs

use chrono::Weekday;
use std::env;
use std::fmt;

/// Everything the pipeline needs from the environment, loaded once in
/// `main` and passed into each component at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub listings_api_key: String,
    pub search_location: String,

    pub mail_api_key: String,
    pub sender_email: String,
    pub sender_name: String,
    /// Primary recipient: NTM reports, weekly summary, error alerts.
    pub recipient_email: String,
    /// Distribution list for the medical-office category.
    pub recipient_emails: Vec<String>,

    pub airtable_base_id: String,
    pub airtable_table: String,
    pub airtable_token: String,

    pub ntm_list_path: String,
    pub health_list_path: String,
    pub stats_path: String,
    pub snapshot_dir: String,

    pub summary_weekday: Weekday,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(String),
    Invalid { var: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(var) => write!(f, "missing environment variable {var}"),
            ConfigError::Invalid { var, reason } => write!(f, "invalid {var}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn required(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let recipient_email = required("RECIPIENT_EMAIL")?;

        // Comma-separated list; falls back to the primary recipient so
        // an unset list doesn't silently kill the second category.
        let recipient_emails: Vec<String> = env::var("RECIPIENT_EMAILS")
            .unwrap_or_default()
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        let recipient_emails = if recipient_emails.is_empty() {
            vec![recipient_email.clone()]
        } else {
            recipient_emails
        };

        let summary_weekday = optional("SUMMARY_WEEKDAY", "Sunday")
            .parse::<Weekday>()
            .map_err(|_| ConfigError::Invalid {
                var: "SUMMARY_WEEKDAY".to_string(),
                reason: "expected a weekday name like Sunday".to_string(),
            })?;

        Ok(Config {
            listings_api_key: required("RAPIDAPI_KEY")?,
            search_location: optional("SEARCH_LOCATION", "st petersburg, fl"),

            mail_api_key: required("BREVO_API_KEY")?,
            sender_email: required("SENDER_EMAIL")?,
            sender_name: optional("SENDER_NAME", "Property Monitor"),
            recipient_email,
            recipient_emails,

            airtable_base_id: required("AIRTABLE_BASE_ID")?,
            airtable_table: required("AIRTABLE_TABLE_NAME")?,
            airtable_token: required("AIRTABLE_ACCESS_TOKEN")?,

            ntm_list_path: optional("NTM_ADDRESSES_CSV", "NTMaddresses.csv"),
            health_list_path: optional("HEALTH_ADDRESSES_CSV", "HealthOfficeAddresses.csv"),
            stats_path: optional("STATS_FILE", "daily_stats.json"),
            snapshot_dir: optional("SNAPSHOT_DIR", "."),

            summary_weekday,
        })
    }
}
