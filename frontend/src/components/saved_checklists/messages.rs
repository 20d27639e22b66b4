use common::model::checklist::ChecklistInstance;

#[derive(Clone)]
pub enum Msg {
    Refresh,
    Listed(Vec<String>),
    ListFailed(String),
    Select(String),
    Opened(String, ChecklistInstance),
    OpenFailed(String),
    DownloadJson,
    DownloadPdf,
    /// PDF generation failed on the server; shown inline, the viewer stays usable.
    PdfFailed(String),
    DownloadFinished,
}
