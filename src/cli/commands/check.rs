//! Offline dataset validation

use crate::seed::SeedError;
use crate::seed::data::Dataset;
use crate::seed::integrity;

pub fn cmd_check() -> anyhow::Result<()> {
    verify_dataset(&Dataset::builtin())
}

/// Prints the outcome of the integrity check and fails on any violation.
pub(super) fn verify_dataset(dataset: &Dataset<'_>) -> anyhow::Result<()> {
    let violations = integrity::check(dataset);

    if violations.is_empty() {
        println!("✓ Dataset is consistent");
        return Ok(());
    }

    println!("Dataset has {} problem(s):", violations.len());
    for violation in &violations {
        println!("  • {violation}");
    }

    Err(SeedError::Integrity(violations.len()).into())
}
