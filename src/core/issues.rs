use crate::core::tfidf::{cosine_similarity, TfidfSpace};
use crate::models::IssueCode;
use std::collections::BTreeSet;

/// Minimum similarity between a query and a catalog phrase to report the issue.
/// Kept low so partial phrasing still matches.
pub const ISSUE_DETECTION_THRESHOLD: f64 = 0.5;

/// Classifies free text against the fixed issue catalog
///
/// The vector space is fitted jointly over every catalog phrase, and the query
/// is then compared with each phrase on its own inside that shared space. This
/// lets "strap falls off shoulder" still hit "straps fall off".
#[derive(Debug, Clone)]
pub struct IssueClassifier {
    space: TfidfSpace,
    phrases: Vec<(IssueCode, Vec<f64>)>,
}

impl IssueClassifier {
    pub fn new() -> Self {
        let catalog: Vec<&str> = IssueCode::ALL.iter().map(|code| code.phrase()).collect();
        let space = TfidfSpace::fit(&catalog);

        let phrases = IssueCode::ALL
            .iter()
            .map(|code| (*code, space.transform(code.phrase())))
            .collect();

        Self { space, phrases }
    }

    /// Return every issue whose phrase is similar enough to the query
    pub fn classify(&self, query: &str) -> BTreeSet<IssueCode> {
        let query_vector = self.space.transform(query);

        self.phrases
            .iter()
            .filter(|(code, phrase_vector)| {
                let similarity = cosine_similarity(&query_vector, phrase_vector);
                tracing::trace!("Issue {} similarity {:.3}", code, similarity);
                similarity > ISSUE_DETECTION_THRESHOLD
            })
            .map(|(code, _)| *code)
            .collect()
    }
}

impl Default for IssueClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_riding_up() {
        let classifier = IssueClassifier::new();
        let issues = classifier.classify("band rides up a lot, I'm 34 38");
        assert_eq!(issues, BTreeSet::from([IssueCode::BandRidingUp]));
    }

    #[test]
    fn test_partial_phrase_matches() {
        let classifier = IssueClassifier::new();
        let issues = classifier.classify("strap falls off shoulder");
        assert!(issues.contains(&IssueCode::StrapsFalling));
    }

    #[test]
    fn test_cup_wrinkling() {
        let classifier = IssueClassifier::new();
        let issues = classifier.classify("38 40 cups wrinkle and gape");
        assert!(issues.contains(&IssueCode::CupWrinkling));
    }

    #[test]
    fn test_multiple_issues() {
        let classifier = IssueClassifier::new();
        let issues = classifier.classify("my band rides up and the cup wrinkle is bad");
        assert!(issues.contains(&IssueCode::BandRidingUp));
        assert!(issues.contains(&IssueCode::CupWrinkling));
    }

    #[test]
    fn test_unrelated_text() {
        let classifier = IssueClassifier::new();
        assert!(classifier.classify("34 38 looking for a sports bra").is_empty());
        assert!(classifier.classify("").is_empty());
    }
}
