//! Offline step: turns the maintenance-plan workbook into `checklists_structure.json`.

use std::process::ExitCode;

use backend::config::Config;
use backend::extractor::extract_workbook;
use env_logger::Env;
use log::{error, info};

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::default();

    match extract_workbook(&config.workbook_path, &config.template_path) {
        Ok(template) => {
            for category in template.categories() {
                info!(
                    "Categoria '{}': {}",
                    category,
                    template.periodicities(category).join(", ")
                );
            }
            info!("{} items extracted", template.item_count());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Extraction failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
