use anyhow::{bail, Context, Result};
use std::io::BufRead;

const MAX_PREALLOCATED_DOCUMENTS: usize = 1024;

/// Everything the console program reads before answering: stop words, documents and the query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub stop_words: String,
    pub documents: Vec<String>,
    pub query: String,
}

/// Read one line without its terminator, or `None` once the input is exhausted.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).context("failed to read input line")?;
    if read == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Leading integer of the count line; the rest of the line is ignored and a negative
/// count means no documents.
fn parse_count(line: &str) -> Result<usize> {
    let token = line.split_whitespace().next().unwrap_or("");
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        bail!("invalid document count: {line:?}");
    }
    if negative {
        return Ok(0);
    }
    Ok(rest[..digits].parse().unwrap_or(usize::MAX))
}

/// Parse the layout: stop words line, document count line, one line per document, query line.
///
/// Reading stops at end of input: missing documents are left out and a missing query is empty.
pub fn read_corpus<R: BufRead>(mut reader: R) -> Result<Corpus> {
    let stop_words = read_line(&mut reader)?.unwrap_or_default();
    let count_line = read_line(&mut reader)?.unwrap_or_default();
    let count = parse_count(&count_line)?;
    let mut documents = Vec::with_capacity(count.min(MAX_PREALLOCATED_DOCUMENTS));
    for _ in 0..count {
        match read_line(&mut reader)? {
            Some(text) => documents.push(text),
            None => break,
        }
    }
    if documents.len() < count {
        tracing::warn!(expected = count, read = documents.len(), "input ended before all documents were read");
    }
    let query = read_line(&mut reader)?.unwrap_or_default();
    Ok(Corpus { stop_words, documents, query })
}
