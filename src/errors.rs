// errors.rs
use crate::fetcher::FetchError;
use crate::matching::ReferenceError;
use std::fmt;

/// Errors that abort a pipeline run. Anything reaching `main` through
/// this type gets logged with a backtrace and reported on the
/// error-alert email path. Downstream send/insert failures are handled
/// (logged, suppressed) at their call sites and never become one of these.
#[derive(Debug)]
pub enum PipelineError {
    Fetch(FetchError),
    Reference(ReferenceError),
    Stats(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Fetch(e) => write!(f, "listing fetch failed: {e}"),
            PipelineError::Reference(e) => write!(f, "reference list error: {e}"),
            PipelineError::Stats(msg) => write!(f, "stats journal error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}
