use anyhow::Result;
use search_core::ScoredDocument;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `{ document_id = X, relevance = Y }` per line.
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

pub fn write_results<W: Write>(out: &mut W, results: &[ScoredDocument], format: OutputFormat) -> Result<()> {
    for doc in results {
        match format {
            OutputFormat::Text => {
                writeln!(out, "{{ document_id = {}, relevance = {} }}", doc.id, doc.relevance)?
            }
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut *out, doc)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
