// fetch the daily near-earth-object feed

use chrono::NaiveDate;
use std::path::Path;

use crate::*;

mod decode;

pub use decode::{decode, FeedEnvelope};

pub const FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";
pub const DEMO_KEY: &str = "DEMO_KEY";

/// The feed keys each day's objects by this rendering of the date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One-day query: the same date is both start and end of the range.
pub fn request_url(endpoint: &str, date: NaiveDate, api_key: &str) -> String {
    let date = date_key(date);
    format!(
        "{}?start_date={}&end_date={}&api_key={}",
        endpoint, date, date, api_key
    )
}

pub fn load_url(url: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let status = curl_get(url, &mut data).map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;
    if !(200..300).contains(&status) {
        return Err(Error::Status { url: url.to_string(), status });
    }
    tracing::info!("fetched {} bytes from {}", data.len(), url);
    Ok(data)
}

pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

fn curl_get(
    url: &str,
    buffer: &mut Vec<u8>,
) -> std::result::Result<u32, curl::Error> {
    let mut ua = curl::easy::Easy::new();
    ua.useragent(&format!(
        "neoscan/{} curl/{}",
        env!("CARGO_PKG_VERSION"),
        curl::Version::get().version()
    ))?;
    ua.follow_location(true)?;
    ua.url(url)?;
    {
        let mut xfer = ua.transfer();
        xfer.write_function(|chunk| {
            buffer.extend_from_slice(chunk);
            Ok(chunk.len())
        })?;
        xfer.perform()?;
    }
    ua.response_code()
}

////////////////////////////////////////////////////////////////////////
