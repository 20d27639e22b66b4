//! Printable summary of a saved checklist.
//!
//! Layout and rendering are split: `summary_lines` decides what goes on the page and
//! is a pure function, `render_pdf` turns those lines into a genpdf document.

use std::path::Path;

use actix_web::{web, HttpResponse, Responder};
use common::model::checklist::ChecklistInstance;
use common::model::{observation_text, truncate_chars};
use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Document, SimplePageDecorator};
use log::{info, warn};

use super::{attachment, store_error_response};
use crate::config::Config;
use crate::store::{ChecklistStore, CHECKLIST_EXTENSION};

const TITLE: &str = "Checklist de Manutenção Preventiva";
/// Descriptions and observations longer than this are cut on the page.
const MAX_TEXT_CHARS: usize = 80;

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("fontes não encontradas: {0}")]
    Font(genpdf::error::Error),
    #[error("falha ao renderizar PDF: {0}")]
    Render(genpdf::error::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryLine {
    Title(String),
    Heading(String),
    Strong(String),
    Plain(String),
    /// Vertical space, in lines.
    Gap(f64),
}

pub fn summary_lines(instance: &ChecklistInstance) -> Vec<SummaryLine> {
    let mut lines = vec![
        SummaryLine::Title(TITLE.to_string()),
        SummaryLine::Gap(2.0),
        SummaryLine::Heading("Informações Gerais:".to_string()),
    ];

    for (key, value) in instance.general_info.fields() {
        lines.push(SummaryLine::Plain(format!("{}: {}", humanize_key(key), value)));
    }
    lines.push(SummaryLine::Plain(format!("Categoria: {}", instance.category)));
    lines.push(SummaryLine::Plain(format!("Periodicidade: {}", instance.periodicity)));
    lines.push(SummaryLine::Plain(format!(
        "Preenchido em: {}",
        instance.filled_at_display()
    )));

    lines.push(SummaryLine::Gap(2.0));
    lines.push(SummaryLine::Heading("Itens Verificados:".to_string()));

    for (code, item) in &instance.items {
        lines.push(SummaryLine::Strong(format!(
            "Item {}: {}",
            code,
            truncate_chars(&item.description, MAX_TEXT_CHARS)
        )));
        lines.push(SummaryLine::Plain(format!("  Status: {}", item.status)));
        lines.push(SummaryLine::Plain(format!("  Técnico: {}", item.technician)));
        if !item.field_notes.is_empty() {
            lines.push(SummaryLine::Plain(format!(
                "  Observações de Campo: {}",
                truncate_chars(&item.field_notes, MAX_TEXT_CHARS)
            )));
        }
        if let Some(observation) = observation_text(&item.original_observation) {
            lines.push(SummaryLine::Plain(format!(
                "  Observações Originais: {}",
                truncate_chars(observation, MAX_TEXT_CHARS)
            )));
        }
        lines.push(SummaryLine::Gap(0.5));
    }
    lines
}

/// `data_inspecao` -> `Data Inspecao`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut after_letter = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}

/// Loads Arial from `dir`, falling back to LiberationSans.
pub fn load_fonts(dir: &Path) -> Result<FontFamily<FontData>, PdfError> {
    if let Ok(family) = genpdf::fonts::from_files(dir, "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files(dir, "LiberationSans", None).map_err(PdfError::Font)
}

pub fn render_pdf(
    instance: &ChecklistInstance,
    fonts: &FontFamily<FontData>,
) -> Result<Vec<u8>, PdfError> {
    let mut doc = Document::new(fonts.clone());
    doc.set_title(format!("{} - {}", instance.category, instance.periodicity));
    doc.set_font_size(10);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    for line in summary_lines(instance) {
        match line {
            SummaryLine::Title(text) => doc.push(
                Paragraph::new(StyledString::new(text, Style::new().bold().with_font_size(16)))
                    .aligned(Alignment::Center),
            ),
            SummaryLine::Heading(text) => doc.push(Paragraph::new(StyledString::new(
                text,
                Style::new().bold().with_font_size(12),
            ))),
            SummaryLine::Strong(text) => {
                doc.push(Paragraph::new(StyledString::new(text, Style::new().bold())))
            }
            SummaryLine::Plain(text) => doc.push(Paragraph::new(text)),
            SummaryLine::Gap(lines) => doc.push(Break::new(lines)),
        }
    }

    let mut out = Vec::new();
    doc.render(&mut out).map_err(PdfError::Render)?;
    Ok(out)
}

fn pdf_filename(filename: &str) -> String {
    let stem = filename.strip_suffix(CHECKLIST_EXTENSION).unwrap_or(filename);
    format!("{}.pdf", stem)
}

/// Handler for `GET /api/checklists/{filename}/pdf`.
///
/// Rendering problems (missing fonts included) answer `503` with the reason; the
/// rest of the application keeps working.
pub async fn process(
    filename: web::Path<String>,
    store: web::Data<dyn ChecklistStore>,
    config: web::Data<Config>,
) -> impl Responder {
    let instance = match store.load(&filename) {
        Ok(instance) => instance,
        Err(e) => return store_error_response(&e),
    };

    match load_fonts(&config.fonts_dir).and_then(|fonts| render_pdf(&instance, &fonts)) {
        Ok(bytes) => {
            info!("PDF generated for {}", filename);
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(attachment(&pdf_filename(&filename)))
                .body(bytes)
        }
        Err(e) => {
            warn!("PDF generation failed for {}: {}", filename, e);
            HttpResponse::ServiceUnavailable().body(format!("Erro ao gerar PDF: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::checklist::{ChecklistItemResponse, GeneralInfo, ItemStatus};

    fn instance(description: &str, notes: &str, observation: &str) -> ChecklistInstance {
        let mut instance = ChecklistInstance {
            general_info: GeneralInfo {
                fleet: "CAM-12".to_string(),
                personnel: "Equipe A".to_string(),
                ..GeneralInfo::default()
            },
            category: "930E-5".to_string(),
            periodicity: "Cada 250H".to_string(),
            filled_at: "2025-07-15T10:20:30.123456".to_string(),
            items: Default::default(),
        };
        instance.items.insert(
            "A.01".to_string(),
            ChecklistItemResponse {
                description: description.to_string(),
                status: ItemStatus::NotOk,
                technician: "Maria".to_string(),
                field_notes: notes.to_string(),
                original_observation: observation.to_string(),
            },
        );
        instance
    }

    fn texts(lines: &[SummaryLine]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|line| match line {
                SummaryLine::Title(t)
                | SummaryLine::Heading(t)
                | SummaryLine::Strong(t)
                | SummaryLine::Plain(t) => Some(t.as_str()),
                SummaryLine::Gap(_) => None,
            })
            .collect()
    }

    #[test]
    fn long_texts_are_cut_at_eighty_chars() {
        let long = "é".repeat(100);
        let lines = summary_lines(&instance(&long, &long, &long));
        let texts = texts(&lines);

        let expected = "é".repeat(80);
        assert!(texts.contains(&format!("Item A.01: {}", expected).as_str()));
        assert!(texts.contains(&format!("  Observações de Campo: {}", expected).as_str()));
        assert!(texts.contains(&format!("  Observações Originais: {}", expected).as_str()));
    }

    #[test]
    fn empty_notes_and_nan_observation_are_omitted() {
        let lines = summary_lines(&instance("Pneus", "", "nan"));
        let texts = texts(&lines);

        assert!(texts.contains(&"  Status: Não OK"));
        assert!(texts.contains(&"  Técnico: Maria"));
        assert!(!texts.iter().any(|t| t.contains("Observações")));
    }

    #[test]
    fn header_lists_general_info_and_fill_time() {
        let lines = summary_lines(&instance("Pneus", "", ""));
        let texts = texts(&lines);

        assert_eq!(lines[0], SummaryLine::Title(TITLE.to_string()));
        assert!(texts.contains(&"Frota: CAM-12"));
        assert!(texts.contains(&"Data Inspecao: "));
        assert!(texts.contains(&"Turno: Manhã"));
        assert!(texts.contains(&"Preenchido em: 2025-07-15T10:20:30"));
        assert_eq!(lines.last(), Some(&SummaryLine::Gap(0.5)));
    }

    #[test]
    fn keys_are_title_cased() {
        assert_eq!(humanize_key("horario_termino"), "Horario Termino");
        assert_eq!(humanize_key("HORIMETRO"), "Horimetro");
    }

    #[test]
    fn missing_fonts_are_an_error() {
        let result = load_fonts(Path::new("/nao/existe/fonts"));
        assert!(matches!(result, Err(PdfError::Font(_))));
    }

    #[test]
    fn pdf_name_replaces_extension() {
        assert_eq!(pdf_filename("checklist_a.json"), "checklist_a.pdf");
    }
}
