pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod models;
pub mod services;
pub mod summarizer;
pub mod traits;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use batch::{summarize_pdfs, BatchRunner};
pub use config::{ApiKey, BatchConfig, API_KEY_ENV, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR};
pub use discovery::discover_pdf_files;
pub use error::{ConfigError, SummaryError};
pub use extractor::{extract_document_text, join_pages, LopdfExtractor, PageText, PdfExtractor};
pub use models::{
    BatchReport, ChatMessage, GenerationRequest, GenerationResponse, ProcessedDocument, Role,
    SkipStage, SkippedDocument,
};
pub use services::{DashScopeClient, DEFAULT_DASHSCOPE_ENDPOINT};
pub use summarizer::{summary_messages, Summarizer};
pub use traits::GenerationService;
pub use writer::{summary_output_path, write_summary, SUMMARY_SUFFIX};
