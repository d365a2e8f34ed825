// src/domain/listing.rs

use crate::domain::address::{core_address, normalize_lot_area};
use crate::fetcher::RawListing;

/// Base for turning the API's relative detail paths into absolute links.
const LISTING_SITE_BASE: &str = "http://www.zillow.com";

/// A listing normalized for matching: lowercased address, absolute
/// detail URL, lot area in square feet. This is the anti-corruption
/// layer between the raw search payload and the matching pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub address: String,
    pub detail_url: String,
    pub price: i64,
    pub lot_area_sqft: i64,
    pub living_area: i64,
    pub image_url: String,
}

impl Listing {
    pub fn from_raw(raw: &RawListing) -> Self {
        Listing {
            address: raw.address.as_deref().unwrap_or("").to_lowercase(),
            detail_url: format!(
                "{LISTING_SITE_BASE}{}",
                raw.detail_url.as_deref().unwrap_or("")
            ),
            price: raw.price.unwrap_or(0),
            lot_area_sqft: normalize_lot_area(
                raw.lot_area_value.unwrap_or(0.0),
                raw.lot_area_unit.as_deref().unwrap_or("sqft"),
            ),
            living_area: raw.living_area.unwrap_or(0.0).round() as i64,
            image_url: raw.img_src.as_deref().unwrap_or("").to_string(),
        }
    }

    /// Coarse matching key: first three tokens before any comma.
    pub fn core_address(&self) -> String {
        core_address(&self.address)
    }
}
