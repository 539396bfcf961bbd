use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A curated fit scenario from the knowledge base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub description: String,
    pub recommendation: String,
    pub reasoning: String,
    pub fit_tips: String,
    #[serde(default)]
    pub common_issues: Vec<String>,
}

impl KnowledgeEntry {
    /// True when any of the given issues is listed for this entry
    pub fn shares_issue(&self, issues: &BTreeSet<IssueCode>) -> bool {
        self.common_issues
            .iter()
            .any(|code| issues.iter().any(|issue| issue.as_str() == code))
    }
}

/// Known fit problems, each anchored to one catalog phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    BandRidingUp,
    StrapsFalling,
    StrapsDigging,
    CupWrinkling,
    GoreFloating,
    Quadraboob,
}

impl IssueCode {
    pub const ALL: [IssueCode; 6] = [
        IssueCode::BandRidingUp,
        IssueCode::StrapsFalling,
        IssueCode::StrapsDigging,
        IssueCode::CupWrinkling,
        IssueCode::GoreFloating,
        IssueCode::Quadraboob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::BandRidingUp => "band_riding_up",
            IssueCode::StrapsFalling => "straps_falling",
            IssueCode::StrapsDigging => "straps_digging",
            IssueCode::CupWrinkling => "cup_wrinkling",
            IssueCode::GoreFloating => "gore_floating",
            IssueCode::Quadraboob => "quadraboob",
        }
    }

    /// Canonical phrase the classifier compares queries against
    pub fn phrase(&self) -> &'static str {
        match self {
            IssueCode::BandRidingUp => "band ride up",
            IssueCode::StrapsFalling => "straps fall off",
            IssueCode::StrapsDigging => "straps dig in",
            IssueCode::CupWrinkling => "cup wrinkle",
            IssueCode::GoreFloating => "gore float or does not lay flat",
            IssueCode::Quadraboob => "quadraboob or overflow",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underbust/bust pair, underbust always strictly below bust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementPair {
    pub underbust: u32,
    pub bust: u32,
}

impl MeasurementPair {
    pub fn new(underbust: u32, bust: u32) -> Option<Self> {
        (underbust < bust).then_some(Self { underbust, bust })
    }
}

/// One knowledge entry scored against the current query
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub entry: &'a KnowledgeEntry,
    pub similarity: f64,
    /// Measurements found in the entry description, empty if none
    pub measurements: Vec<u32>,
}

/// Whether the answer came from a confident match or the sister-size fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Direct,
    SisterSize,
}

/// Successful recommendation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub recommendation: String,
    pub confidence: f64,
    pub reasoning: String,
    pub fit_tips: String,
    pub identified_issues: BTreeSet<IssueCode>,
}
