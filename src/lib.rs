pub mod asteroid;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod pretty;
pub mod run;
pub mod scan;

#[cfg(test)]
mod fixture;

pub use crate::asteroid::{parse_record, Asteroid, Cause, ParseError};
pub use crate::error::*;
pub use crate::feed::FeedEnvelope;
pub use crate::scan::{Scan, Skipped};
