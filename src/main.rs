use crate::config::Config;
use crate::domain::Listing;
use crate::errors::PipelineError;
use crate::fetcher::ListingFetcher;
use crate::mailer::Mailer;
use crate::matching::{match_by_containment, match_by_core_address, ReferenceList};
use crate::records::{record_matches, AirtableStore};
use crate::stats::{is_summary_day, DailyStat, StatsJournal};
use std::time::Duration;
use tracing::{error, info};

mod config;
mod domain;
mod errors;
mod fetcher;
mod mailer;
mod matching;
mod records;
mod reports;
mod stats;

/// Pause between the two category emails so we don't hammer the mail API.
const EMAIL_COOLDOWN: Duration = Duration::from_secs(15);

fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: no .env file loaded: {e}");
    }

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cfg) {
        let backtrace = std::backtrace::Backtrace::force_capture();
        error!("run failed: {e}");

        let today = chrono::Local::now().date_naive();
        let mailer = Mailer::new(
            cfg.mail_api_key.clone(),
            cfg.sender_email.clone(),
            cfg.sender_name.clone(),
        );
        let subject = format!("Property Monitor ERROR - {}", today.format("%m/%d/%y"));
        let body = reports::error_alert_body(&e.to_string(), &backtrace.to_string());
        if let Err(send_err) =
            mailer.send_html(std::slice::from_ref(&cfg.recipient_email), &subject, body)
        {
            error!("error alert email failed: {send_err}");
        }
    }
}

fn run(cfg: &Config) -> Result<(), PipelineError> {
    let today = chrono::Local::now().date_naive();

    let fetcher = ListingFetcher::new(cfg).map_err(PipelineError::Fetch)?;
    let raw = fetcher.fetch_all_listings(today).map_err(PipelineError::Fetch)?;
    info!("fetched {} listings for {}", raw.len(), cfg.search_location);

    let listings: Vec<Listing> = raw.iter().map(Listing::from_raw).collect();

    let mailer = Mailer::new(
        cfg.mail_api_key.clone(),
        cfg.sender_email.clone(),
        cfg.sender_name.clone(),
    );

    let ntm_refs = ReferenceList::load(&cfg.ntm_list_path).map_err(PipelineError::Reference)?;
    let ntm_matches = match_by_containment(&listings, &ntm_refs);
    if ntm_matches.is_empty() {
        info!("no NTM matches today");
    } else {
        let subject = format!(
            "NTM-1 Property Matches ({}) - {}",
            ntm_matches.len(),
            today.format("%m/%d/%y")
        );
        let body = reports::containment_email_body(reports::containment_report(&ntm_matches));
        if let Err(e) = mailer.send_html(std::slice::from_ref(&cfg.recipient_email), &subject, body)
        {
            error!("NTM match email failed: {e}");
        }

        let store = AirtableStore::new(cfg);
        record_matches(&store, &ntm_matches);
    }

    std::thread::sleep(EMAIL_COOLDOWN);

    let health_refs = ReferenceList::load(&cfg.health_list_path).map_err(PipelineError::Reference)?;
    let health_matches = match_by_core_address(&listings, &health_refs);
    if health_matches.is_empty() {
        info!("no Health matches today");
    } else {
        let subject = format!(
            "Medical Office Property Matches ({}) - {}",
            health_matches.len(),
            today.format("%m/%d/%y")
        );
        let body = reports::zoned_email_body(reports::zoned_report(&health_matches));
        if let Err(e) = mailer.send_html(&cfg.recipient_emails, &subject, body) {
            error!("Health match email failed: {e}");
        }
    }

    let journal = StatsJournal::new(cfg.stats_path.clone());
    journal
        .append(DailyStat::from_run(
            today,
            raw.len(),
            &ntm_matches,
            &health_matches,
        ))
        .map_err(PipelineError::Stats)?;

    if is_summary_day(today, cfg.summary_weekday) {
        journal.send_weekly_summary(today, |subject, body| {
            mailer.send_html(std::slice::from_ref(&cfg.recipient_email), subject, body)
        });
    }

    Ok(())
}
