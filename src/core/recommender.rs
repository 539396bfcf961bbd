use crate::core::error::FitError;
use crate::core::issues::IssueClassifier;
use crate::core::similarity::{query_measurements, FitScorer, TfidfScorer};
use crate::models::{IssueCode, Recommendation, RecommendationKind, ScoredCandidate};
use crate::services::KnowledgeBase;
use std::collections::BTreeSet;

/// Entries scoring above this are confident matches
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Minimum trimmed query length in characters
const MIN_QUERY_CHARS: usize = 4;

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Query validation
/// 2. Issue classification (once per query)
/// 3. Per-entry similarity scoring, in knowledge base order
/// 4. Best direct match, else best sister-size fallback among entries
///    sharing an identified issue
#[derive(Debug, Clone)]
pub struct Recommender<S = TfidfScorer> {
    knowledge_base: KnowledgeBase,
    classifier: IssueClassifier,
    scorer: S,
    similarity_threshold: f64,
}

impl Recommender<TfidfScorer> {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self::with_scorer(knowledge_base, TfidfScorer)
    }
}

impl<S: FitScorer> Recommender<S> {
    pub fn with_scorer(knowledge_base: KnowledgeBase, scorer: S) -> Self {
        Self {
            knowledge_base,
            classifier: IssueClassifier::new(),
            scorer,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Recommend a fit for a free-text description of the problem
    ///
    /// Measurement errors in the query abort the whole request. A valid query
    /// against an empty knowledge base always ends in [`FitError::NoMatch`].
    pub fn get_recommendation(&self, query: &str) -> Result<Recommendation, FitError> {
        validate_query(query)?;
        // Checked up front as well so the outcome does not depend on corpus size
        query_measurements(query)?;

        let identified_issues = self.classifier.classify(query);

        let mut relevant: Vec<ScoredCandidate<'_>> = Vec::new();
        let mut sister: Vec<ScoredCandidate<'_>> = Vec::new();

        for entry in self.knowledge_base.entries() {
            let candidate = self.scorer.score(query, entry)?;
            tracing::trace!("Entry {:?} similarity {:.3}", entry.recommendation, candidate.similarity);

            if candidate.similarity > self.similarity_threshold {
                relevant.push(candidate);
            } else if entry.shares_issue(&identified_issues) {
                sister.push(candidate);
            }
        }

        tracing::debug!(
            "Scored {} entries: {} relevant, {} sister candidates, issues {:?}",
            self.knowledge_base.len(),
            relevant.len(),
            sister.len(),
            identified_issues
        );

        if let Some(best) = best_candidate(relevant) {
            return Ok(direct_recommendation(best, identified_issues));
        }

        match best_candidate(sister) {
            Some(best) => sister_recommendation(best, identified_issues),
            None => Err(FitError::NoMatch),
        }
    }
}

fn validate_query(query: &str) -> Result<(), FitError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(FitError::validation("empty query"));
    }
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Err(FitError::validation("query too short"));
    }
    Ok(())
}

/// Highest similarity wins, ties go to the earliest candidate
fn best_candidate(candidates: Vec<ScoredCandidate<'_>>) -> Option<ScoredCandidate<'_>> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(b) if b.similarity >= candidate.similarity => Some(b),
        _ => Some(candidate),
    })
}

fn direct_recommendation(best: ScoredCandidate<'_>, identified_issues: BTreeSet<IssueCode>) -> Recommendation {
    Recommendation {
        kind: RecommendationKind::Direct,
        recommendation: best.entry.recommendation.clone(),
        confidence: best.similarity,
        reasoning: best.entry.reasoning.clone(),
        fit_tips: best.entry.fit_tips.clone(),
        identified_issues,
    }
}

fn sister_recommendation(
    best: ScoredCandidate<'_>,
    identified_issues: BTreeSet<IssueCode>,
) -> Result<Recommendation, FitError> {
    let (underbust, bust) = match best.measurements.as_slice() {
        [underbust, bust, ..] => (*underbust, *bust),
        other => {
            return Err(FitError::Internal(format!(
                "sister candidate {:?} has measurements {:?}, need two",
                best.entry.description, other
            )))
        }
    };

    Ok(Recommendation {
        kind: RecommendationKind::SisterSize,
        recommendation: format!(
            "{} . Here is a similar sister size for {} underbust and {} bust.",
            best.entry.recommendation, underbust, bust
        ),
        confidence: best.similarity,
        reasoning: format!(
            "Unable to find exact match. But for similar measurements, {}",
            best.entry.reasoning
        ),
        fit_tips: format!("Please consult our measurement guide. or {}", best.entry.fit_tips),
        identified_issues,
    })
}
