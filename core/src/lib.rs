pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod stopwords;
pub mod tokenizer;

pub use config::{SearchConfig, DEFAULT_MAX_RESULTS};
pub use error::{Result, SearchError};
pub use index::{AddOutcome, DocId, InvertedIndex, TermPostings};
pub use query::Query;
pub use ranker::{Ranker, ScoredDocument};
pub use server::SearchServer;
pub use stopwords::StopWords;
