//! Similarity scoring — TF-IDF cosine similarity between a job description and a resume.
//!
//! The corpus is always exactly the two documents being compared, so IDF is rebuilt on
//! every call and nothing is carried between comparisons.
//!
//! Weighting follows the usual vectorizer defaults:
//! - tokens: runs of two or more word characters, lowercased
//! - stop words: English list, removed before counting
//! - tf: raw counts
//! - idf: ln((1 + n) / (1 + df)) + 1
//! - vectors L2-normalized

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::screening::stopwords::is_stop_word;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Scores how closely a resume resembles a job description. Result is in [0, 1].
///
/// Carried by the pipeline as `Arc<dyn SimilarityScorer>`.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, job_description: &str, resume: &str) -> f64;
}

/// Default scorer: two-document TF-IDF with cosine similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, job_description: &str, resume: &str) -> f64 {
        let vectors = tfidf_vectors(&[job_description, resume]);
        cosine_similarity(&vectors[0], &vectors[1])
    }
}

type TermVector = BTreeMap<String, f64>;

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(String::from)
        .collect()
}

fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

/// Builds one L2-normalized TF-IDF vector per document, using `documents` as the corpus.
fn tfidf_vectors(documents: &[&str]) -> Vec<TermVector> {
    let counts: Vec<BTreeMap<String, f64>> = documents.iter().map(|d| term_counts(d)).collect();
    let n = documents.len() as f64;

    let vocabulary: BTreeSet<&String> = counts.iter().flat_map(|c| c.keys()).collect();
    let idf: BTreeMap<&String, f64> = vocabulary
        .into_iter()
        .map(|term| {
            let df = counts.iter().filter(|c| c.contains_key(term)).count() as f64;
            (term, ((1.0 + n) / (1.0 + df)).ln() + 1.0)
        })
        .collect();

    counts
        .iter()
        .map(|doc| {
            let mut vector: TermVector = doc
                .iter()
                .map(|(term, tf)| (term.clone(), tf * idf[term]))
                .collect();
            let norm = magnitude(&vector);
            if norm > 0.0 {
                vector.values_mut().for_each(|w| *w /= norm);
            }
            vector
        })
        .collect()
}

fn magnitude(v: &TermVector) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// `dot(a, b) / (|a| * |b|)`, or 0.0 when either vector is empty.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
