//! Question answering over uploaded PDF documents.
//!
//! The pipeline is extract, prompt, ask: the PDF's text is pulled out
//! locally, wrapped in an analysis prompt together with the question, and
//! sent to a generative-language endpoint. The API key lives in server
//! configuration and is appended here, server side; it never travels to a
//! browser.

mod client;
mod markup;
mod prompt;

use thiserror::Error;

pub use client::{AnswerClient, AnswerRequestConfig};
pub use markup::render_lightweight_markup;
pub use prompt::{build_prompt, MAX_DOCUMENT_CHARS};

#[derive(Debug, Error)]
pub enum DocQaError {
    #[error("document text extraction failed: {0}")]
    Extract(#[from] pdf_extract::OutputError),
    #[error("document contains no extractable text")]
    EmptyDocument,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("answers API returned status {status}")]
    ApiStatus { status: u16 },
    #[error("answers API returned no candidates")]
    EmptyAnswer,
}

/// Extracts the plain text of a PDF held in memory.
///
/// One attempt, no retry: a document that cannot be parsed is reported to
/// the caller as-is so the user can re-upload a different file.
///
/// # Errors
///
/// [`DocQaError::Extract`] if the bytes are not a readable PDF,
/// [`DocQaError::EmptyDocument`] if parsing succeeds but yields only
/// whitespace (a scanned document with no text layer, usually).
pub fn extract_text(bytes: &[u8]) -> Result<String, DocQaError> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    if text.trim().is_empty() {
        return Err(DocQaError::EmptyDocument);
    }
    Ok(text)
}
