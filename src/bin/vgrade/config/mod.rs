use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use vsepr_grade::GradeConfig;

use crate::cli::OrderOptions;

pub fn build_grade_config(opts: &OrderOptions) -> Result<GradeConfig> {
    let base = match &opts.config {
        Some(path) => load_grade_config(path)?,
        None => GradeConfig::default(),
    };

    Ok(merge_flags(base, opts))
}

fn load_grade_config(path: &Path) -> Result<GradeConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read grading config: {}", path.display()))?;
    let config: GradeConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse grading config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded grading config");
    Ok(config)
}

fn merge_flags(base: GradeConfig, opts: &OrderOptions) -> GradeConfig {
    GradeConfig {
        ignore_axial_order: base.ignore_axial_order || opts.ignore_axial_order,
        ignore_peripheral_order: base.ignore_peripheral_order || opts.ignore_peripheral_order,
        ignore_equatorial_order: base.ignore_equatorial_order || opts.ignore_equatorial_order,
    }
}
