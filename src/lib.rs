//! Fit Advisor - bra fit recommendations from a curated knowledge base
//!
//! This library matches a free-text description of a fit problem against
//! known fit scenarios. It extracts measurements, classifies fit issues and
//! scores every scenario with TF-IDF cosine similarity, falling back to a
//! sister-size suggestion when no scenario is a confident match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, FitError, IssueClassifier, extract_measurements};
pub use models::{KnowledgeEntry, IssueCode, Recommendation, RecommendationKind, RecommendationRequest};
pub use services::KnowledgeBase;
