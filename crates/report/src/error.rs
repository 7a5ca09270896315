/// Error type for report rendering failures.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The PDF backend could not assemble or serialize the document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}
