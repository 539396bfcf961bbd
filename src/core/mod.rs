// Core algorithm exports
pub mod error;
pub mod issues;
pub mod measurements;
pub mod recommender;
pub mod similarity;
pub mod tfidf;

pub use error::FitError;
pub use issues::{IssueClassifier, ISSUE_DETECTION_THRESHOLD};
pub use measurements::extract_measurements;
pub use recommender::{Recommender, DEFAULT_SIMILARITY_THRESHOLD};
pub use similarity::{FitScorer, TfidfScorer, query_measurements};
pub use tfidf::{TfidfSpace, cosine_similarity, tokenize};
