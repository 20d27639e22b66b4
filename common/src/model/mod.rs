use serde::{Deserialize, Deserializer};

pub mod checklist;
pub mod template;

/// Reads an optional text field, treating JSON `null` like a missing value.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps at most `max` characters of `text`, cutting on a character boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Template observation worth showing: blank spreadsheet cells arrive as `"nan"`.
pub fn observation_text(observation: &str) -> Option<&str> {
    if observation.is_empty() || observation == "nan" {
        None
    } else {
        Some(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::{observation_text, truncate_chars};

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("Não OK", 2), "Nã");
        assert_eq!(truncate_chars("curto", 80), "curto");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn nan_and_empty_observations_are_hidden() {
        assert_eq!(observation_text("nan"), None);
        assert_eq!(observation_text(""), None);
        assert_eq!(observation_text("Usar EPI"), Some("Usar EPI"));
    }
}
