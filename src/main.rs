use std::path::PathBuf;

use ufoplot::{UfoPlotConfig, load_from_path, load_from_str, region_counts, run_ufoplot};

/// Dataset shipped with the binary so it is runnable out of the box.
const BUNDLED_DATASET: &str = include_str!("../data/ufo.json");

fn main() {
    setup_logger();
    if let Err(err) = try_main() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // `ufoplot [dataset.json]`, defaulting to the bundled records.
    let records = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_from_path(&path)?,
        None => load_from_str(BUNDLED_DATASET)?,
    };

    for (region, count) in region_counts(&records) {
        log::info!("region {region}: {count} report(s)");
    }

    run_ufoplot(records, UfoPlotConfig::default())?;
    Ok(())
}

fn setup_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply();
    if let Err(err) = result {
        eprintln!("logger setup failed: {err}");
    }
}
