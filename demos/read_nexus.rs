// Example usage of the Nexus plot reader

use anyhow::Context;
use nex_reader::utils::conf_helper::config_from_env;
use nex_reader::{ClassName, NexReader};
use tracing::{debug, info, Level};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/SPE1.plt".to_string());

    let config = config_from_env().context("loading reader config")?;
    let reader = NexReader::new(config);
    let plot = reader
        .load_file(&path)
        .with_context(|| format!("decoding {}", path))?;

    info!("Unit system: {}", plot.header.unit_system);
    info!(
        "Date: {:02}/{:02}/{}",
        plot.header.day, plot.header.month, plot.header.year
    );

    info!("Classes:");
    for (class_name, varnames) in plot.catalog.iter() {
        let names: Vec<String> = varnames.iter().map(|v| v.trimmed()).collect();
        info!("  {} [{}]", class_name.trimmed(), names.join(", "));
        for instance in plot.instance_names(class_name) {
            debug!("      {}", instance.trimmed());
        }
    }
    info!("Total records: {}", plot.records.len());

    // First variable of the first well, if any
    if let Some(well) = ClassName::padded("WELL") {
        if let (Some(var), Some(instance)) = (
            plot.catalog.get(&well).and_then(|vars| vars.first().copied()),
            plot.instance_names(&well).first().copied(),
        ) {
            let series = plot.series(&well, &instance, &var);
            info!(
                "\n{} {}: {} points",
                instance.trimmed(),
                var.trimmed(),
                series.len()
            );
            if !series.is_empty() {
                info!("First: t={}, value={}", series.times[0], series.values[0]);
                info!(
                    "Last: t={}, value={}",
                    series.times[series.len() - 1],
                    series.values[series.len() - 1]
                );
            }
        }
    }

    Ok(())
}
