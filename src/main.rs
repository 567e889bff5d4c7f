use ordered_tree::report::{Dataset, Report};

use serde::Deserialize;
use tracing::{info, subscriber, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Deserialize, Debug)]
struct Config {
    /// Path to a JSON dataset. The bundled dataset is used when unset.
    #[serde(rename = "library_data")]
    data: Option<String>,
    /// Maximum level of log events to print.
    #[serde(rename = "library_log", default = "default_log_level")]
    log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn main() -> anyhow::Result<()> {
    let config = envy::from_env::<Config>()?;

    let level: Level = config.log_level.parse()?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(subscriber)?;

    let dataset = match &config.data {
        Some(path) => Dataset::load(path)?,
        None => {
            info!("using bundled dataset");
            Dataset::bundled()?
        }
    };
    info!(
        citizens = dataset.citizens.len(),
        visitors = dataset.visitors.len(),
        "dataset ready"
    );

    let report = Report::build(&dataset)?;
    print!("{}", report);

    Ok(())
}
