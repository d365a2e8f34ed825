// fetcher.rs
use crate::config::Config;
use crate::fetcher::models::{RawListing, SearchPage};
use crate::fetcher::FetchError;
use chrono::NaiveDate;
use rand::Rng;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

const SEARCH_URL: &str = "https://us-housing-market-data1.p.rapidapi.com/propertyExtendedSearch";
const API_HOST: &str = "us-housing-market-data1.p.rapidapi.com";

/// Wait applied after each failed attempt; one more attempt than waits.
const RETRY_DELAYS_SECS: [u64; 2] = [5, 10];
const MAX_ATTEMPTS: usize = RETRY_DELAYS_SECS.len() + 1;
const JITTER_MAX_SECS: u64 = 2;

pub struct ListingFetcher {
    client: Client,
    api_key: String,
    location: String,
    snapshot_dir: String,
}

impl ListingFetcher {
    pub fn new(cfg: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: cfg.listings_api_key.clone(),
            location: cfg.search_location.clone(),
            snapshot_dir: cfg.snapshot_dir.clone(),
        })
    }

    /// Fetch every result page, snapshot the raw merged payload, and
    /// return the typed listings. One snapshot file per successful run.
    pub fn fetch_all_listings(&self, run_date: NaiveDate) -> Result<Vec<RawListing>, FetchError> {
        let raw = collect_pages(|page| self.fetch_page(page))?;

        let snapshot_path = Path::new(&self.snapshot_dir)
            .join(format!("all_property_data_{}.json", run_date.format("%Y-%m-%d")));
        write_snapshot(&raw, &snapshot_path)?;
        info!("saved {} raw listings to {}", raw.len(), snapshot_path.display());

        let listings: Result<Vec<RawListing>, _> = raw
            .iter()
            .map(|v| serde_json::from_value(v.clone()))
            .collect();
        listings.map_err(|e| FetchError::Deserialize(e.to_string()))
    }

    /// One page, retried with the fixed delay ladder plus jitter.
    fn fetch_page(&self, page: u32) -> Result<SearchPage, FetchError> {
        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch_page(page) {
                Ok(result) => {
                    if attempt > 1 {
                        info!("page {page} succeeded on attempt {attempt}");
                    }
                    return Ok(result);
                }
                Err(e) => {
                    warn!("page {page} attempt {attempt} failed: {e}");
                    last_err = Some(e);

                    if attempt < MAX_ATTEMPTS {
                        let base = RETRY_DELAYS_SECS[attempt - 1];
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_SECS);
                        std::thread::sleep(Duration::from_secs(base + jitter));
                    }
                }
            }
        }

        Err(FetchError::RetriesExhausted {
            page,
            last: last_err.map(|e| e.to_string()).unwrap_or_default(),
        })
    }

    fn try_fetch_page(&self, page: u32) -> Result<SearchPage, FetchError> {
        let page_str = page.to_string();
        let params = [
            ("location", self.location.as_str()),
            ("status_type", "ForSale"),
            ("home_type", "Houses, Apartments, Multi-Family"),
            ("daysOn", "1"),
            ("page", page_str.as_str()),
        ];

        let resp = self
            .client
            .get(SEARCH_URL)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_HOST)
            .query(&params)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {status}: {text}")));
        }

        serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))
    }
}

/// Page 1 reports the total page count; the rest are fetched in order
/// and their result arrays concatenated. Generic over the page source
/// so pagination is testable without a live endpoint.
fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<Value>, FetchError>
where
    F: FnMut(u32) -> Result<SearchPage, FetchError>,
{
    let first = fetch_page(1)?;
    let total_pages = first.total_pages.unwrap_or(1);

    let mut all = first.props;
    for page in 2..=total_pages {
        all.extend(fetch_page(page)?.props);
    }
    Ok(all)
}

fn write_snapshot(raw: &[Value], path: &Path) -> Result<(), FetchError> {
    let file = File::create(path).map_err(|e| FetchError::Io(format!("{}: {e}", path.display())))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, raw).map_err(|e| FetchError::Io(e.to_string()))
}
