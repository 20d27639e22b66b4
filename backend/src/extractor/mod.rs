//! Maintenance-plan extraction.
//!
//! The workbook has one sheet per equipment category and no header row. Each sheet
//! is scanned top to bottom:
//!
//! - a row with a cell containing both `"Cada"` and `"H"` (e.g. `"Cada 250H"`) sets the
//!   current periodicity, which sticks until another such row appears;
//! - a row whose first cell is text like `"A.01"` (longer than one character, contains
//!   a `.`, starts with a letter) is an item filed under the current periodicity.
//!
//! Both rules are evaluated independently, so one row can do both. Rows that match
//! neither are skipped without being reported.

mod cell;
pub mod preview;
mod workbook;

use std::fs;
use std::path::Path;

use common::model::template::{ChecklistItemDef, ChecklistTemplate, UNDEFINED_PERIODICITY};
use log::info;

use crate::json::to_pretty_json;

pub use cell::Cell;
pub use workbook::{read_workbook, Sheet};

const PERIODICITY_MARKER: &str = "Cada";
const HOUR_MARKER: char = 'H';

const CODE_COLUMN: usize = 0;
const PERIODICITY_COLUMN: usize = 1;
const DESCRIPTION_COLUMN: usize = 2;
const OBSERVATION_COLUMN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no sheets")]
    NoSheets,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to serialize template: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write preview: {0}")]
    Csv(#[from] csv::Error),
}

/// First cell of the row carrying a periodicity label, trimmed.
pub fn periodicity_in_row(row: &[Cell]) -> Option<String> {
    row.iter()
        .filter_map(Cell::to_text)
        .find(|text| text.contains(PERIODICITY_MARKER) && text.contains(HOUR_MARKER))
        .map(|text| text.trim().to_string())
}

/// Whether `value` looks like an item code such as `"A.01"`.
pub fn is_item_code(value: &str) -> bool {
    value.chars().count() > 1
        && value.contains('.')
        && value.chars().next().is_some_and(char::is_alphabetic)
}

/// Reads an item definition from the row, if its first column holds an item code.
pub fn classify_item(row: &[Cell]) -> Option<ChecklistItemDef> {
    let code = row.get(CODE_COLUMN)?.as_str()?;
    if !is_item_code(code) {
        return None;
    }

    let text_at = |column: usize| {
        row.get(column)
            .and_then(Cell::to_text)
            .unwrap_or_default()
    };

    Some(ChecklistItemDef {
        code: code.to_string(),
        periodicity: text_at(PERIODICITY_COLUMN),
        description: text_at(DESCRIPTION_COLUMN),
        observation: text_at(OBSERVATION_COLUMN),
    })
}

/// Files every item of `sheet` into `template` under the sheet's category.
pub fn extract_sheet(template: &mut ChecklistTemplate, sheet: &Sheet) -> usize {
    let category = sheet.name.trim();
    let mut periodicity = UNDEFINED_PERIODICITY.to_string();
    let mut items = 0;

    for row in &sheet.rows {
        if let Some(found) = periodicity_in_row(row) {
            periodicity = found;
        }
        if let Some(item) = classify_item(row) {
            template.push_item(category, &periodicity, item);
            items += 1;
        }
    }

    items
}

pub fn extract_template(sheets: &[Sheet]) -> ChecklistTemplate {
    let mut template = ChecklistTemplate::new();
    for sheet in sheets {
        info!("Processing sheet: {}", sheet.name);
        let items = extract_sheet(&mut template, sheet);
        info!("  {} items found in '{}'", items, sheet.name.trim());
    }
    template
}

/// Reads the workbook at `workbook_path` and writes the template JSON to `output_path`.
pub fn extract_workbook(
    workbook_path: &Path,
    output_path: &Path,
) -> Result<ChecklistTemplate, ExtractError> {
    info!("Reading workbook {}", workbook_path.display());
    let sheets = read_workbook(workbook_path)?;
    if sheets.is_empty() {
        return Err(ExtractError::NoSheets);
    }

    let template = extract_template(&sheets);
    fs::write(output_path, to_pretty_json(&template)?)?;
    info!("Checklist structure saved to {}", output_path.display());
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells
            .iter()
            .map(|c| if c.is_empty() { Cell::Empty } else { text(c) })
            .collect()
    }

    fn sheet(name: &str, rows: Vec<Vec<Cell>>) -> Sheet {
        Sheet { name: name.to_string(), rows }
    }

    fn codes(template: &ChecklistTemplate, category: &str, periodicity: &str) -> Vec<String> {
        template
            .items(category, periodicity)
            .unwrap_or(&[])
            .iter()
            .map(|item| item.code.clone())
            .collect()
    }

    #[test]
    fn items_before_any_marker_are_undefined() {
        let sheets = vec![sheet(
            "930E-5",
            vec![row(&["A.01", "Diário", "Verificar nível de óleo", "", "", "", ""])],
        )];
        let template = extract_template(&sheets);

        let items = template.items("930E-5", UNDEFINED_PERIODICITY).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, "A.01");
        assert_eq!(items[0].periodicity, "Diário");
        assert_eq!(items[0].description, "Verificar nível de óleo");
    }

    #[test]
    fn periodicity_sticks_across_non_item_rows() {
        let sheets = vec![sheet(
            "Motor",
            vec![
                row(&["", "  Cada 250H  ", ""]),
                row(&["Item", "Periodicidade", "Descrição"]),
                row(&["", "", ""]),
                row(&["B.03", "", "Trocar filtro"]),
                row(&["Observação geral", "", ""]),
                row(&["B.04", "", "Inspecionar correia"]),
            ],
        )];
        let template = extract_template(&sheets);

        assert_eq!(template.periodicities("Motor"), vec!["Cada 250H"]);
        assert_eq!(codes(&template, "Motor", "Cada 250H"), vec!["B.03", "B.04"]);
    }

    #[test]
    fn later_marker_switches_periodicity() {
        let sheets = vec![sheet(
            "Motor",
            vec![
                row(&["Cada 250H"]),
                row(&["B.01", "", "Um"]),
                row(&["", "", "Cada 500H"]),
                row(&["B.02", "", "Dois"]),
            ],
        )];
        let template = extract_template(&sheets);

        assert_eq!(codes(&template, "Motor", "Cada 250H"), vec!["B.01"]);
        assert_eq!(codes(&template, "Motor", "Cada 500H"), vec!["B.02"]);
    }

    #[test]
    fn marker_row_can_also_be_an_item() {
        let sheets = vec![sheet(
            "Freios",
            vec![row(&["C.01", "Cada 1000H", "Medir lonas", "", "", "", "Anotar"])],
        )];
        let template = extract_template(&sheets);

        let items = template.items("Freios", "Cada 1000H").unwrap();
        assert_eq!(items[0].code, "C.01");
        assert_eq!(items[0].observation, "Anotar");
    }

    #[test]
    fn first_marker_in_row_wins() {
        let cells = row(&["Cada 250H", "Cada 500H"]);
        assert_eq!(periodicity_in_row(&cells).as_deref(), Some("Cada 250H"));
        assert_eq!(periodicity_in_row(&row(&["Cada dia"])), None);
        assert_eq!(periodicity_in_row(&row(&["250H"])), None);
    }

    #[test]
    fn rejects_rows_that_do_not_look_like_codes() {
        for first in [
            Cell::Text("A".to_string()),
            Cell::Text("A01".to_string()),
            Cell::Text("1.01".to_string()),
            Cell::Text(".A1".to_string()),
            Cell::Number(1.01),
            Cell::Empty,
        ] {
            assert!(classify_item(&[first.clone(), text("x"), text("y")]).is_none(), "{first:?}");
        }
    }

    #[test]
    fn every_emitted_code_matches_the_pattern() {
        let sheets = vec![sheet(
            "Geral",
            vec![
                row(&["A.01", "", "ok"]),
                row(&["Cada 250H"]),
                row(&["Notas.", "", "frase com ponto"]),
                row(&["9.1", "", "numérico"]),
                vec![Cell::Number(3.0), text(""), text("x")],
                row(&["Ú.12", "", "acentuado"]),
            ],
        )];
        let template = extract_template(&sheets);

        for category in template.categories() {
            for periodicity in template.periodicities(category) {
                for item in template.items(category, periodicity).unwrap() {
                    assert!(is_item_code(&item.code), "{}", item.code);
                }
            }
        }
        // "Notas." has the shape of a code and is kept; the numeric rows are not.
        assert_eq!(template.item_count(), 3);
    }

    #[test]
    fn short_rows_fill_missing_columns_with_empty_text() {
        let item = classify_item(&row(&["D.07"])).unwrap();
        assert_eq!(item.periodicity, "");
        assert_eq!(item.description, "");
        assert_eq!(item.observation, "");

        let numeric = classify_item(&[text("D.08"), Cell::Number(250.0), text("Lubrificar")]).unwrap();
        assert_eq!(numeric.periodicity, "250");
    }

    #[test]
    fn category_is_trimmed_sheet_name_and_empty_sheets_are_absent() {
        let sheets = vec![
            sheet(" Cabine ", vec![row(&["E.01", "", "Limpar"])]),
            sheet("Capa", vec![row(&["Plano de manutenção"])]),
        ];
        let template = extract_template(&sheets);

        assert_eq!(template.categories().collect::<Vec<_>>(), vec!["Cabine"]);
    }

    #[test]
    fn periodicity_resets_per_sheet() {
        let sheets = vec![
            sheet("Motor", vec![row(&["Cada 250H"]), row(&["B.01", "", ""])]),
            sheet("Cabine", vec![row(&["E.01", "", ""])]),
        ];
        let template = extract_template(&sheets);

        assert_eq!(template.periodicities("Cabine"), vec![UNDEFINED_PERIODICITY]);
    }
}
