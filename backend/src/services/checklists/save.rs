use actix_web::{web, HttpResponse, Responder};
use chrono::{Local, NaiveDateTime};
use common::form::{validate_general_info, ValidationError};
use common::model::checklist::ChecklistInstance;
use common::model::template::ChecklistTemplate;
use common::requests::{SavedChecklist, SubmitChecklistRequest};
use log::{error, info};

use crate::store::{checklist_filename, ChecklistStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Checklist '{category}' / '{periodicity}' não existe no modelo")]
    UnknownChecklist {
        category: String,
        periodicity: String,
    },
    #[error("Erro ao salvar checklist: {0}")]
    Store(#[from] StoreError),
}

/// Handler for `POST /api/checklists/save`.
///
/// - `200 OK` with the `SavedChecklist` on success.
/// - `400 Bad Request` when fleet or personnel are blank; nothing is written.
/// - `404 Not Found` when the category/periodicity is not in the template.
/// - `503 Service Unavailable` when the store cannot write the document.
pub async fn process(
    payload: web::Json<SubmitChecklistRequest>,
    template: web::Data<ChecklistTemplate>,
    store: web::Data<dyn ChecklistStore>,
) -> impl Responder {
    let now = Local::now().naive_local();
    match save_checklist(&payload, &template, store.get_ref(), now) {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e @ SaveError::Validation(_)) => HttpResponse::BadRequest().body(e.to_string()),
        Err(e @ SaveError::UnknownChecklist { .. }) => HttpResponse::NotFound().body(e.to_string()),
        Err(e @ SaveError::Store(_)) => {
            error!("{}", e);
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
    }
}

/// Validates the submission, builds the instance stamped with `now` and stores it.
pub fn save_checklist(
    request: &SubmitChecklistRequest,
    template: &ChecklistTemplate,
    store: &dyn ChecklistStore,
    now: NaiveDateTime,
) -> Result<SavedChecklist, SaveError> {
    validate_general_info(&request.general_info)?;

    let items = template
        .items(&request.category, &request.periodicity)
        .ok_or_else(|| SaveError::UnknownChecklist {
            category: request.category.clone(),
            periodicity: request.periodicity.clone(),
        })?;

    let filled_at = now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    let instance = ChecklistInstance::from_submission(request, items, filled_at);
    let filename = checklist_filename(&instance, now);
    let path = store.save(&instance, &filename)?;

    info!(
        "Checklist {} / {} for fleet {} saved as {}",
        instance.category, instance.periodicity, instance.general_info.fleet, filename
    );
    Ok(SavedChecklist {
        filename,
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FsChecklistStore;
    use chrono::NaiveDate;
    use common::model::checklist::{GeneralInfo, ItemStatus};
    use common::model::template::ChecklistItemDef;
    use common::requests::ItemDraft;
    use tempfile::tempdir;

    fn template() -> ChecklistTemplate {
        let mut template = ChecklistTemplate::new();
        for code in ["A.01", "A.02"] {
            template.push_item(
                "930E-5",
                "Cada 250H",
                ChecklistItemDef {
                    code: code.to_string(),
                    periodicity: String::new(),
                    description: format!("Descrição {code}"),
                    observation: String::new(),
                },
            );
        }
        template
    }

    fn request(fleet: &str, personnel: &str) -> SubmitChecklistRequest {
        let mut responses = template()
            .items("930E-5", "Cada 250H")
            .unwrap()
            .iter()
            .map(|item| (item.code.clone(), ItemDraft::default()))
            .collect::<Vec<_>>();
        responses[1].1.status = ItemStatus::Ok;
        SubmitChecklistRequest {
            general_info: GeneralInfo {
                fleet: fleet.to_string(),
                personnel: personnel.to_string(),
                ..GeneralInfo::default()
            },
            category: "930E-5".to_string(),
            periodicity: "Cada 250H".to_string(),
            responses: responses.into_iter().collect(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 15)
            .and_then(|d| d.and_hms_micro_opt(10, 20, 30, 42))
            .unwrap()
    }

    #[test]
    fn stores_instance_under_generated_name() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path());

        let saved = save_checklist(&request("CAM-12", "Equipe A"), &template(), &store, now()).unwrap();

        assert_eq!(saved.filename, "checklist_930E-5_Cada 250H_CAM-12_20250715_102030.json");
        let stored = store.load(&saved.filename).unwrap();
        assert_eq!(stored.filled_at, "2025-07-15T10:20:30.000042");
        assert_eq!(stored.items["A.02"].status, ItemStatus::Ok);
        assert_eq!(stored.items["A.01"].description, "Descrição A.01");
    }

    #[test]
    fn blank_required_fields_never_write() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path().join("salvos"));

        for (fleet, personnel) in [("", "Equipe A"), ("CAM-12", ""), (" ", " ")] {
            let result = save_checklist(&request(fleet, personnel), &template(), &store, now());
            assert!(matches!(result, Err(SaveError::Validation(_))));
        }
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn unknown_periodicity_is_rejected() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path());
        let mut request = request("CAM-12", "Equipe A");
        request.periodicity = "Cada 9999H".to_string();

        let result = save_checklist(&request, &template(), &store, now());

        assert!(matches!(result, Err(SaveError::UnknownChecklist { .. })));
        assert!(store.list().unwrap().is_empty());
    }
}
