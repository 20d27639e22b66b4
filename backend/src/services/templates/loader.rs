use std::fs;
use std::path::Path;

use common::model::template::ChecklistTemplate;
use log::info;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid template {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Reads `checklists_structure.json` as written by `extract_checklists`.
pub fn load_template(path: &Path) -> Result<ChecklistTemplate, TemplateError> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| TemplateError::Io {
        path: display.clone(),
        source,
    })?;
    let template: ChecklistTemplate =
        serde_json::from_slice(&bytes).map_err(|source| TemplateError::Json {
            path: display.clone(),
            source,
        })?;

    info!(
        "Template loaded from {}: {} categories, {} items",
        display,
        template.categories().count(),
        template.item_count()
    );
    Ok(template)
}
