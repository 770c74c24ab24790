// one daily run: fetch, decode, scan, report

use anyhow::Context;
use std::io::Write;

use crate::config::Config;
use crate::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    Fetching,
    Decoding,
    Scanning,
    Reporting,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Fetching => "fetching",
            Stage::Decoding => "decoding",
            Stage::Scanning => "scanning",
            Stage::Reporting => "reporting",
        })
    }
}

fn failed(stage: Stage) -> String {
    format!("{} the near-earth-object feed failed", stage)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub date: String,
    pub element_count: i64,
    pub objects: usize,
    pub scan: Scan,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.scan.skipped.is_empty() {
            write!(
                f,
                "Skipped {} of {} objects that could not be parsed\n\n",
                self.scan.skipped.len(),
                self.objects
            )?;
        }
        write!(f, "*** The biggest Asteroid details *** {}\n\n", self.scan.biggest)?;
        write!(
            f,
            "*** The closest to the Earth Asteroid details *** {}\n",
            self.scan.closest
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The feed had no objects for the day; nothing to report.
    Empty { date: String, element_count: i64 },
    Report(Report),
}

pub fn fetch(config: &Config) -> Result<Vec<u8>> {
    match &config.feed_file {
        Some(path) => feed::load_file(path),
        None => feed::load_url(&config.request_url()),
    }
}

pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<Outcome> {
    tracing::debug!("{} {}", Stage::Fetching, config.date_key());
    let data = fetch(config).with_context(|| failed(Stage::Fetching))?;
    run_bytes(&data, &config.date_key(), out)
}

/// Everything after the fetch, for a response body already in hand.
pub fn run_bytes<W: Write>(
    data: &[u8],
    date: &str,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let io = || failed(Stage::Reporting);

    writeln!(out, "/***** URL Content *****\n").with_context(io)?;
    out.write_all(data).with_context(io)?;
    writeln!(out).with_context(io)?;

    tracing::debug!("{} {} bytes", Stage::Decoding, data.len());
    let decoded = feed::decode(data, date);
    // the count is known even when the day's list turns out empty
    let count = match &decoded {
        Ok(envelope) => Some(envelope.element_count),
        Err(Error::Missing { expected, .. }) => Some(*expected),
        Err(_) => None,
    };
    if let Some(count) = count {
        writeln!(
            out,
            "\nNumber of NEOs close to the Earth on {} is {}\n",
            date, count
        )
        .with_context(io)?;
    }
    let envelope = decoded.with_context(|| failed(Stage::Decoding))?;

    if envelope.element_count < 1 {
        return Ok(Outcome::Empty {
            date: date.to_string(),
            element_count: envelope.element_count,
        });
    }

    tracing::debug!("{} {} objects", Stage::Scanning, envelope.objects.len());
    let scan = scan::scan(&envelope.objects)
        .and_then(|scan| {
            scan.ok_or(Error::Missing {
                expected: envelope.element_count,
                date: date.to_string(),
            })
        })
        .with_context(|| failed(Stage::Scanning))?;
    let report = Report {
        date: date.to_string(),
        element_count: envelope.element_count,
        objects: envelope.objects.len(),
        scan,
    };

    tracing::debug!("{} {}", Stage::Reporting, date);
    write!(out, "{}", report).with_context(io)?;
    out.flush().with_context(io)?;
    Ok(Outcome::Report(report))
}
