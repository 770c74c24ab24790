use anyhow::Result;

use neoscan::config::Config;
use neoscan::logging::init_logging;
use neoscan::run::{run, Outcome};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(config.as_ref().map_or("info", |c| c.log_level.as_str()));
    let config = config?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out)? {
        Outcome::Empty { date, .. } => {
            tracing::info!("no near-earth objects on {}", date);
        }
        Outcome::Report(report) => {
            tracing::info!(
                "{} of {} objects on {} parsed",
                report.scan.parsed,
                report.objects,
                report.date
            );
        }
    }
    Ok(())
}
