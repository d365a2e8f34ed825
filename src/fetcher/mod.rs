mod fetch_error;
mod fetcher;
mod models;

pub use fetch_error::FetchError;
pub use fetcher::ListingFetcher;
pub use models::{RawListing, SearchPage};
