use crate::model::checklist::GeneralInfo;

/// Required inspection fields left blank at submit time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Por favor, preencha todos os campos obrigatórios na barra lateral: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// Fleet and personnel are mandatory; blank (whitespace-only) values count as missing.
pub fn validate_general_info(info: &GeneralInfo) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if info.fleet.trim().is_empty() {
        missing.push("Frota");
    }
    if info.personnel.trim().is_empty() {
        missing.push("Responsáveis");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_missing_field() {
        let err = validate_general_info(&GeneralInfo::default()).unwrap_err();
        assert_eq!(err.missing, vec!["Frota", "Responsáveis"]);
        assert!(err.to_string().ends_with("Frota, Responsáveis"));
    }

    #[test]
    fn whitespace_is_blank() {
        let info = GeneralInfo {
            fleet: "  ".to_string(),
            personnel: "Carlos".to_string(),
            ..GeneralInfo::default()
        };
        assert_eq!(validate_general_info(&info).unwrap_err().missing, vec!["Frota"]);
    }

    #[test]
    fn accepts_filled_fields() {
        let info = GeneralInfo {
            fleet: "CAM-07".to_string(),
            personnel: "Carlos".to_string(),
            ..GeneralInfo::default()
        };
        assert!(validate_general_info(&info).is_ok());
    }
}
