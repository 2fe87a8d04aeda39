//! Export command handler

use degree_planner::config::Config;
use degree_planner::core::export::{export_to_file, ExportContext, ExportFormat};
use degree_planner::{error, info};
use std::path::PathBuf;

use super::{load_catalog, open_store};

/// Default file name for an export in `format`
fn default_file_name(format: ExportFormat) -> String {
    format!("degree_plan.{}", format.extension())
}

/// Write the plan in `format` to `output`, or to the exports directory
pub fn run(config: &Config, format: ExportFormat, output: Option<PathBuf>) {
    let catalog = load_catalog(config);
    let store = open_store(&catalog, config);

    let path = output.unwrap_or_else(|| config.exports_dir().join(default_file_name(format)));
    let ctx = ExportContext::new(&catalog, store.state(), store.progress());

    match export_to_file(format.exporter().as_ref(), &ctx, &path) {
        Ok(()) => {
            info!("Exported {format} plan to {}", path.display());
            println!("✓ Plan exported to: {}", path.display());
        }
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
