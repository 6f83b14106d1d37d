use anyhow::{Context, Result};
use reading_checks_rust::report::run;
use std::env::VarError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let batch_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: reading_report <batch.json>")?;

    let thresholds_path = match std::env::var("THRESHOLDS_PATH") {
        Ok(path) => Some(PathBuf::from(path)),
        Err(VarError::NotPresent) => None,
        Err(e) => return Err(e).context("THRESHOLDS_PATH is set but unusable"),
    };

    let report = run(&batch_path, thresholds_path.as_deref())?;
    if report.summary.errors > 0 {
        tracing::warn!("{} reading(s) could not be classified", report.summary.errors);
    }
    tracing::info!(
        "Classified {} criticality, {} efficiency, {} fail-safe readings and {} triangles",
        report.criticality.len(),
        report.efficiency.len(),
        report.fail_safe.len(),
        report.triangles.len()
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
