pub mod input;
pub mod output;

use anyhow::{Context, Result};
use search_core::{DocId, SearchConfig, SearchServer};
use std::io::{BufRead, Write};
use std::path::Path;

pub use input::{read_corpus, Corpus};
pub use output::{write_results, OutputFormat};

/// Build the engine from a corpus: stop words first, then documents numbered from 0.
pub fn build_server(corpus: &Corpus, config: SearchConfig) -> Result<SearchServer> {
    let mut server = SearchServer::new(config).context("invalid search configuration")?;
    server.set_stop_words(&corpus.stop_words);
    for (id, text) in corpus.documents.iter().enumerate() {
        let doc_id = DocId::try_from(id).context("too many documents")?;
        server.add_document(doc_id, text);
    }
    tracing::info!(
        num_docs = server.document_count(),
        num_terms = server.index().term_count(),
        "ingested documents"
    );
    Ok(server)
}

/// Read a corpus and query from `input`, answer it, and write the ranked results to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, config: SearchConfig, format: OutputFormat) -> Result<()> {
    let corpus = read_corpus(input)?;
    let server = build_server(&corpus, config)?;
    let results = server.find_top_documents(&corpus.query);
    tracing::info!(query = %corpus.query, hits = results.len(), "query answered");
    write_results(out, &results, format)?;
    out.flush()?;
    Ok(())
}

/// Resolve the engine config: explicit cap beats the config file, which beats the default.
pub fn load_config(path: Option<&Path>, max_results: Option<usize>) -> Result<SearchConfig> {
    let mut config = match path {
        Some(p) => {
            let json = std::fs::read_to_string(p).with_context(|| format!("failed to read config {}", p.display()))?;
            SearchConfig::from_json_str(&json).with_context(|| format!("failed to load config {}", p.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(n) = max_results {
        config.max_results = n;
    }
    config.validate()?;
    Ok(config)
}
