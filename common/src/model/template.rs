use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Periodicity label used for items found before any "Cada ...H" marker in a sheet.
pub const UNDEFINED_PERIODICITY: &str = "Não Definida";

/// One line of the maintenance plan, as classified by the extractor.
///
/// `code` identifies the item inside its (category, periodicity) list, e.g. `"A.01"`.
/// `periodicity` is the raw value of the item's own periodicity column, which may
/// differ from the section label the item is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItemDef {
    pub code: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub periodicity: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub observation: String,
}

/// Category -> periodicity -> items, every level in first-seen order.
///
/// Serialized as a plain JSON object of objects of arrays, which is the format of
/// `checklists_structure.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistTemplate {
    categories: IndexMap<String, IndexMap<String, Vec<ChecklistItemDef>>>,
}

impl ChecklistTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the list of `category`/`periodicity`, creating both levels on first use.
    pub fn push_item(&mut self, category: &str, periodicity: &str, item: ChecklistItemDef) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(periodicity.to_string())
            .or_default()
            .push(item);
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Periodicity labels of `category`; empty when the category is unknown.
    pub fn periodicities(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|periods| periods.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn items(&self, category: &str, periodicity: &str) -> Option<&[ChecklistItemDef]> {
        self.categories
            .get(category)
            .and_then(|periods| periods.get(periodicity))
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|periods| periods.values())
            .map(Vec::len)
            .sum()
    }
}
