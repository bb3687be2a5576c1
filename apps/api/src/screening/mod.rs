// Resume screening: text extraction, skill matching, TF-IDF similarity, verdict.
// Everything below `handlers` is synchronous and free of I/O beyond the input bytes.

pub mod export;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod similarity;
pub mod skills;
pub mod stopwords;
pub mod verdict;
