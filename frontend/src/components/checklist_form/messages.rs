use common::form::FormEvent;
use common::requests::SavedChecklist;

/// Sidebar inputs that make up the `GeneralInfo` of the inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoField {
    Equipment,
    Fleet,
    InspectionDate,
    HourMeter,
    StartTime,
    EndTime,
    Personnel,
    Shift,
}

#[derive(Clone)]
pub enum Msg {
    /// Forwarded to the `FormSession` as is.
    Form(FormEvent),
    EditInfo(InfoField, String),
    SaveSucceeded(SavedChecklist),
    SaveFailed(String),
}
