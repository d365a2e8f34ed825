use crate::domain::Listing;
use crate::matching::reference::ReferenceList;
use urlencoding::encode;

/// GIS web-app viewers; a percent-encoded address goes in `find`.
pub const NTM_MAP_VIEWER: &str =
    "https://egis.stpete.org/portal/apps/webappviewer/index.html?id=76797e9d8d8b4d20982cb1a2c77acd11";
pub const ZONING_MAP_VIEWER: &str =
    "https://egis.stpete.org/portal/apps/webappviewer/index.html?id=f0ff270cad0940a2879b38e955319dfa";

/// Zone classes that never produce a core-address match.
const EXCLUDED_ZONES: [&str; 4] = ["NTM-1", "RC-1", "RC-2", "RC-3"];

/// A listing that matched a reference list, enriched with everything
/// the report, email, and record store need.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub listing: Listing,
    pub zone_class: Option<String>,
    pub ntm_map_url: Option<String>,
    pub zoning_map_url: String,
}

fn ntm_map_url(address: &str) -> String {
    format!("{NTM_MAP_VIEWER}&find={}", encode(address))
}

fn zoning_map_url(address: &str) -> String {
    format!("{ZONING_MAP_VIEWER}&find={}", encode(address))
}

/// Strategy A: a listing matches when any reference address is a
/// substring of the listing address. Both sides are lowercased by
/// their loaders, so the comparison is case-insensitive.
pub fn match_by_containment(listings: &[Listing], refs: &ReferenceList) -> Vec<MatchRecord> {
    listings
        .iter()
        .filter(|l| refs.rows.iter().any(|r| l.address.contains(&r.address)))
        .map(|l| MatchRecord {
            zone_class: None,
            ntm_map_url: Some(ntm_map_url(&l.address)),
            zoning_map_url: zoning_map_url(&l.address),
            listing: l.clone(),
        })
        .collect()
}

/// Strategy B: match on core-address equality against the first
/// reference row whose zone class is not excluded. Unlike the
/// containment strategy there is no substring fallback, and an
/// excluded zone never matches even on an exact core hit.
pub fn match_by_core_address(listings: &[Listing], refs: &ReferenceList) -> Vec<MatchRecord> {
    listings
        .iter()
        .filter_map(|l| {
            let core = l.core_address();
            let hit = refs.rows.iter().find(|r| {
                r.core_address == core
                    && !EXCLUDED_ZONES.contains(&r.zone_class.as_deref().unwrap_or(""))
            })?;

            Some(MatchRecord {
                zone_class: hit.zone_class.clone(),
                ntm_map_url: None,
                zoning_map_url: zoning_map_url(&l.address),
                listing: l.clone(),
            })
        })
        .collect()
}
