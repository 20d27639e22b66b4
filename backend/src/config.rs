//! Compiled-in locations and server settings.
//!
//! The tool runs on a single field workstation, so every path is a fixed literal;
//! there are no environment variables or command-line flags.

use std::path::PathBuf;

/// Writable directory holding one JSON file per saved inspection.
pub const CHECKLISTS_DIR: &str = "/home/ubuntu/checklists_salvos";
/// Template produced by `extract_checklists` and read by the server at startup.
pub const TEMPLATE_PATH: &str = "checklists_structure.json";
/// Maintenance plan workbook read by the offline tools.
pub const WORKBOOK_PATH: &str =
    "/home/ubuntu/upload/930E-5-PlanodeManutençãoPreventiva-15.07.2025.xlsx";
/// Output of `preview_workbook`.
pub const PREVIEW_PATH: &str = "/home/ubuntu/excel_content_preview.txt";
/// Directory with the TTF files used by the PDF renderer.
pub const FONTS_DIR: &str = "./fonts";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub checklists_dir: PathBuf,
    pub template_path: PathBuf,
    pub workbook_path: PathBuf,
    pub preview_path: PathBuf,
    pub fonts_dir: PathBuf,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            checklists_dir: PathBuf::from(CHECKLISTS_DIR),
            template_path: PathBuf::from(TEMPLATE_PATH),
            workbook_path: PathBuf::from(WORKBOOK_PATH),
            preview_path: PathBuf::from(PREVIEW_PATH),
            fonts_dir: PathBuf::from(FONTS_DIR),
            open_browser: true,
        }
    }
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
