mod airtable;

pub use airtable::AirtableStore;

use crate::domain::address::capitalize_first;
use crate::matching::MatchRecord;
use std::error::Error;
use std::fmt;
use tracing::{error, info};

#[derive(Debug)]
pub enum StoreError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::RequestFailed(msg) => write!(f, "Request failed: {msg}"),
            StoreError::ApiError(msg) => write!(f, "API error: {msg}"),
        }
    }
}

impl Error for StoreError {}

/// The insert shape for the contact store.
pub struct NewContactRecord<'a> {
    pub name: String,
    pub url: &'a str,
    pub lot_size: i64,
    pub price: i64,
    pub photo_url: &'a str,
    pub ntm_map_url: &'a str,
    pub zoning_map_url: &'a str,
}

pub trait ContactStore {
    fn find_by_name(&self, name: &str) -> Result<bool, StoreError>;
    fn insert(&self, record: &NewContactRecord) -> Result<(), StoreError>;
}

/// Insert each match unless a record with the same display name is
/// already stored. A duplicate is logged, not an error; store failures
/// are logged and never abort the run. Lookup-then-insert is not
/// transactional, which is fine while runs are scheduled sequentially.
pub fn record_matches(store: &impl ContactStore, matches: &[MatchRecord]) {
    for rec in matches {
        let name = capitalize_first(&rec.listing.address);

        match store.find_by_name(&name) {
            Ok(true) => {
                info!("skipping duplicate record: {name}");
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                error!("record lookup failed for {name}: {e}");
                continue;
            }
        }

        let record = NewContactRecord {
            url: &rec.listing.detail_url,
            lot_size: rec.listing.lot_area_sqft,
            price: rec.listing.price,
            photo_url: &rec.listing.image_url,
            ntm_map_url: rec.ntm_map_url.as_deref().unwrap_or(""),
            zoning_map_url: &rec.zoning_map_url,
            name,
        };

        match store.insert(&record) {
            Ok(()) => info!("inserted record: {}", record.name),
            Err(e) => error!("record insert failed for {}: {e}", record.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;
    use std::cell::RefCell;

    struct FakeStore {
        names: RefCell<Vec<String>>,
        fail_inserts: bool,
    }

    impl FakeStore {
        fn new() -> Self {
            Self {
                names: RefCell::new(Vec::new()),
                fail_inserts: false,
            }
        }
    }

    impl ContactStore for FakeStore {
        fn find_by_name(&self, name: &str) -> Result<bool, StoreError> {
            Ok(self.names.borrow().iter().any(|n| n == name))
        }

        fn insert(&self, record: &NewContactRecord) -> Result<(), StoreError> {
            if self.fail_inserts {
                return Err(StoreError::ApiError("insert rejected".to_string()));
            }
            self.names.borrow_mut().push(record.name.clone());
            Ok(())
        }
    }

    fn match_record(address: &str) -> MatchRecord {
        MatchRecord {
            listing: Listing {
                address: address.to_string(),
                detail_url: "http://www.zillow.com/homedetails/1".to_string(),
                price: 450000,
                lot_area_sqft: 9000,
                living_area: 1200,
                image_url: "https://photos.example.com/1.jpg".to_string(),
            },
            zone_class: None,
            ntm_map_url: Some("https://egis.example.com/ntm?find=x".to_string()),
            zoning_map_url: "https://egis.example.com/zoning?find=x".to_string(),
        }
    }

    #[test]
    fn same_address_twice_in_one_run_stores_once() {
        let store = FakeStore::new();
        let matches = vec![match_record("123 main st"), match_record("123 main st")];

        record_matches(&store, &matches);

        assert_eq!(store.names.borrow().len(), 1);
        assert_eq!(store.names.borrow()[0], "123 main st");
    }

    #[test]
    fn repeat_runs_do_not_double_insert() {
        let store = FakeStore::new();
        let matches = vec![match_record("123 main st")];

        record_matches(&store, &matches);
        record_matches(&store, &matches);

        assert_eq!(store.names.borrow().len(), 1);
    }

    #[test]
    fn distinct_addresses_all_insert() {
        let store = FakeStore::new();
        let matches = vec![match_record("123 main st"), match_record("456 oak ave")];

        record_matches(&store, &matches);

        assert_eq!(store.names.borrow().len(), 2);
    }

    #[test]
    fn insert_failures_are_swallowed() {
        let store = FakeStore {
            names: RefCell::new(Vec::new()),
            fail_inserts: true,
        };

        record_matches(&store, &[match_record("123 main st")]);

        assert!(store.names.borrow().is_empty());
    }
}
