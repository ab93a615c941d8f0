// Score value objects returned by the Perspective API.
//
// Plain immutable data with named fields. The wire-format structs live next
// to the code that parses them; these are the types callers keep.

/// One aggregate score per attribute for the whole comment.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryScore {
    /// Score value, typically a 0.0-1.0 probability
    pub value: f64,
    /// Scoring type reported by the API, e.g. "PROBABILITY"
    pub score_type: String,
}

/// A score for an attribute localized to a character range within the comment.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanScore {
    pub value: f64,
    pub score_type: String,
    /// Character offset where the scored span begins
    pub begin: usize,
    /// Character offset just past the end of the scored span
    pub end: usize,
}
