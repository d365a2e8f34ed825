mod matcher;
mod reference;

pub use matcher::{match_by_containment, match_by_core_address, MatchRecord};
pub use matcher::{NTM_MAP_VIEWER, ZONING_MAP_VIEWER};
pub use reference::{ReferenceError, ReferenceList, ReferenceRow};
