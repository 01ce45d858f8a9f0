use crate::parser::load_metrics;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a metrics JSON file and print its inventory
pub fn validate_metrics_file(file_path: impl AsRef<Path>) -> Result<()> {
    let file_path = file_path.as_ref();
    println!("Validating metrics: {}", file_path.display());

    let table = load_metrics(file_path).context("Failed to load metrics")?;
    let contracts = table.contracts();
    let deploy_sizes = table
        .records()
        .iter()
        .filter(|r| r.is_deploy() && r.bytecode_size_bytes.is_some())
        .count();

    println!("✓ Valid metrics JSON");
    println!("  Records: {}", table.len());
    println!("  Contracts: {}", contracts.join(", "));
    println!("  Actions: {}", table.actions().join(", "));
    println!("  Deploy rows with bytecode size: {}", deploy_sizes);

    if let [baseline, candidate] = contracts.as_slice() {
        println!("  Two-contract comparison: {} vs {}", baseline, candidate);
    } else {
        println!("  Two-contract comparison: not applicable ({} contracts)", contracts.len());
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Gas Metrics Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Gas, fee and bytecode-size reports comparing smart-contract variants.");
}
