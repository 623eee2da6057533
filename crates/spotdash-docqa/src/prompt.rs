//! Prompt assembly for the answers API.

/// Upper bound on document text sent per question, in characters. Longer
/// documents are truncated from the end; the model's context is finite
/// and the interesting tables in these reports come first.
pub const MAX_DOCUMENT_CHARS: usize = 60_000;

/// Wraps document text and a user question into the analysis prompt.
///
/// The instructions pin the model to the document so it does not answer
/// from general knowledge when the report lacks the figure.
#[must_use]
pub fn build_prompt(document_text: &str, question: &str) -> String {
    let document = truncate_chars(document_text, MAX_DOCUMENT_CHARS);
    format!(
        "Eres un analista de medios publicitarios. Responde la pregunta \
         usando exclusivamente la información del siguiente documento. Si \
         el documento no contiene la respuesta, dilo explícitamente.\n\n\
         Documento:\n{document}\n\nPregunta: {question}"
    )
}

/// Truncation counted in chars, so a multibyte document never splits
/// mid-codepoint.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
