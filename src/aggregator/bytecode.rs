//! Bytecode size extraction from deploy rows.

use crate::parser::schema::MetricsTable;
use crate::utils::error::AggregateError;
use log::warn;

/// Bytecode size per contract, de-duplicated on (contract, size)
///
/// **Public** - order follows the input rows
///
/// # Errors
/// * `AggregateError::MissingColumn` - deploy rows exist but none carries
///   `bytecodeSizeBytes`
pub fn bytecode_sizes(table: &MetricsTable) -> Result<Vec<(String, u64)>, AggregateError> {
    let deploys: Vec<_> = table.records().iter().filter(|r| r.is_deploy()).collect();

    if !deploys.is_empty() && deploys.iter().all(|r| r.bytecode_size_bytes.is_none()) {
        return Err(AggregateError::MissingColumn("bytecodeSizeBytes"));
    }

    let mut sizes: Vec<(String, u64)> = Vec::new();
    for record in deploys {
        match record.bytecode_size_bytes {
            Some(size) => {
                let entry = (record.contract.clone(), size);
                if !sizes.contains(&entry) {
                    sizes.push(entry);
                }
            }
            None => warn!("Deploy record of {} has no bytecodeSizeBytes", record.contract),
        }
    }

    Ok(sizes)
}
