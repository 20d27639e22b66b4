//! Dumps the first rows of the workbook's first sheet as tab-separated text, to
//! inspect the layout before tuning the extractor.

use std::process::ExitCode;

use backend::config::Config;
use backend::extractor::preview::preview_workbook;
use env_logger::Env;
use log::error;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::default();

    match preview_workbook(&config.workbook_path, &config.preview_path) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Preview failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
