use crate::core::error::FitError;
use crate::core::measurements::{extract_measurements, with_measurement_suffix};
use crate::core::tfidf::{cosine_similarity, TfidfSpace};
use crate::models::{KnowledgeEntry, MeasurementPair, ScoredCandidate};

/// Scores a query against a single knowledge entry
pub trait FitScorer: Send + Sync {
    fn score<'a>(&self, query: &str, entry: &'a KnowledgeEntry) -> Result<ScoredCandidate<'a>, FitError>;
}

/// Validate the query's leading measurements as an underbust/bust pair
pub fn query_measurements(query: &str) -> Result<(Vec<u32>, MeasurementPair), FitError> {
    let measurements = extract_measurements(query);
    if measurements.len() < 2 {
        return Err(FitError::validation("insufficient measurements"));
    }

    let pair = MeasurementPair::new(measurements[0], measurements[1])
        .ok_or_else(|| FitError::validation("underbust must be less than bust"))?;

    Ok((measurements, pair))
}

/// TF-IDF cosine scorer with a vocabulary local to each query/entry pair
///
/// A fresh two-document space is fitted for every comparison: the query plus
/// its measurement list against the entry description plus its measurement
/// list. Scores are only comparable by magnitude across entries. Switching to
/// one corpus-wide vocabulary changes which entry wins, so keep it local.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfScorer;

impl FitScorer for TfidfScorer {
    fn score<'a>(&self, query: &str, entry: &'a KnowledgeEntry) -> Result<ScoredCandidate<'a>, FitError> {
        let (query_numbers, _) = query_measurements(query)?;

        // Entry data is not validated, a bad description just yields no numbers
        let entry_numbers = extract_measurements(&entry.description);

        let query_doc = with_measurement_suffix(query, &query_numbers);
        let entry_doc = with_measurement_suffix(&entry.description, &entry_numbers);

        let space = TfidfSpace::fit(&[query_doc.as_str(), entry_doc.as_str()]);
        let similarity = cosine_similarity(&space.transform(&query_doc), &space.transform(&entry_doc));

        Ok(ScoredCandidate {
            entry,
            similarity,
            measurements: entry_numbers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            description: description.to_string(),
            recommendation: "Try a 32D".to_string(),
            reasoning: "Band too loose".to_string(),
            fit_tips: "Fasten on the loosest hook".to_string(),
            common_issues: vec!["band_riding_up".to_string()],
        }
    }

    #[test]
    fn test_requires_two_measurements() {
        let e = entry("32 36 band riding up");
        let err = TfidfScorer.score("band rides up, I'm 34", &e).unwrap_err();
        assert_eq!(err, FitError::validation("insufficient measurements"));
    }

    #[test]
    fn test_requires_underbust_below_bust() {
        let e = entry("32 36 band riding up");
        let err = TfidfScorer.score("band rides up 38 34", &e).unwrap_err();
        assert_eq!(err, FitError::validation("underbust must be less than bust"));

        let err = TfidfScorer.score("band rides up 36 36", &e).unwrap_err();
        assert_eq!(err, FitError::validation("underbust must be less than bust"));
    }

    #[test]
    fn test_identical_text_is_max_score() {
        let e = entry("32 36 band riding up");
        let scored = TfidfScorer.score("32 36 band riding up", &e).unwrap();
        assert!((scored.similarity - 1.0).abs() < 1e-9);
        assert_eq!(scored.measurements, vec![32, 36]);
    }

    #[test]
    fn test_score_in_unit_range() {
        let e = entry("common with 32 36 band riding up");
        for query in ["band rides up a lot, I'm 34 38", "30 40 nothing in common", "32 36"] {
            let scored = TfidfScorer.score(query, &e).unwrap();
            assert!((0.0..=1.0).contains(&scored.similarity), "{}", scored.similarity);
        }
    }

    #[test]
    fn test_malformed_entry_degrades() {
        let e = entry("no numbers in this one");
        let scored = TfidfScorer.score("34 38 band rides up", &e).unwrap();
        assert!(scored.measurements.is_empty());
        assert!(scored.similarity < 1.0);
    }
}
