// Comment lifecycle and score storage.
//
// A Comment is an immutable text payload plus a small state machine:
// Created -> Submitted -> Analyzed. The analyzer drives the transitions;
// scores become readable only once the state reaches Analyzed, and the raw
// response body only while the comment sits in Submitted.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog;
use crate::error::{AnalyzerError, Result};
use crate::score::{SpanScore, SummaryScore};

/// Analysis lifecycle state. Analyzed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Created,
    Submitted,
    Analyzed,
}

impl CommentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentState::Created => "created",
            CommentState::Submitted => "submitted",
            CommentState::Analyzed => "analyzed",
        }
    }
}

impl std::fmt::Display for CommentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A piece of text to be scored, plus the per-attribute scores once analysis
/// completes.
#[derive(Debug)]
pub struct Comment {
    text: String,
    state: CommentState,
    raw_analysis_body: Option<String>,
    summary_scores: HashMap<String, SummaryScore>,
    span_scores: HashMap<String, SpanScore>,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: CommentState::Created,
            raw_analysis_body: None,
            summary_scores: HashMap::new(),
            span_scores: HashMap::new(),
        }
    }

    /// The comment text as given at construction.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> CommentState {
        self.state
    }

    /// Move the comment to a new lifecycle state.
    ///
    /// Analyzed is terminal: once reached, every further transition fails.
    /// Below the terminal state the setter accepts any target; forward-only
    /// ordering is enforced by the analyze call sequence, not here.
    pub fn set_state(&mut self, state: CommentState) -> Result<()> {
        if self.state == CommentState::Analyzed {
            return Err(AnalyzerError::State(
                "cannot change state of a comment that has already been analyzed".into(),
            ));
        }
        self.state = state;
        Ok(())
    }

    /// Store a raw API response body, parse it, and transition to Analyzed.
    ///
    /// On a malformed document the comment keeps the raw body and stays in
    /// Submitted, so the response is still inspectable.
    pub fn set_analysis(&mut self, raw_body: &str) -> Result<()> {
        if self.state != CommentState::Submitted {
            return Err(AnalyzerError::State(
                "cannot set analysis on a comment that has not been submitted".into(),
            ));
        }

        self.raw_analysis_body = Some(raw_body.to_string());

        let response: AnalyzeResponse = serde_json::from_str(raw_body).map_err(|e| {
            AnalyzerError::Data(format!("malformed score data from Perspective API: {e}"))
        })?;

        for (attribute, data) in response.attribute_scores {
            self.summary_scores.insert(
                attribute.clone(),
                SummaryScore {
                    value: data.summary_score.value,
                    score_type: data.summary_score.score_type,
                },
            );

            // One span score per attribute; a later entry overwrites an earlier one
            for span in data.span_scores {
                self.span_scores.insert(
                    attribute.clone(),
                    SpanScore {
                        value: span.score.value,
                        score_type: span.score.score_type,
                        begin: span.begin,
                        end: span.end,
                    },
                );
            }
        }

        self.set_state(CommentState::Analyzed)
    }

    /// Summary score for the given attribute model.
    ///
    /// Returns None when the model exists in the catalog but was not among
    /// those requested for this comment.
    pub fn summary_score(&self, model: &str) -> Result<Option<&SummaryScore>> {
        if self.state != CommentState::Analyzed {
            return Err(AnalyzerError::State(
                "cannot read summary score from a comment that has not been analyzed".into(),
            ));
        }
        if !catalog::in_full_catalog(model) {
            return Err(AnalyzerError::Data(format!(
                "attribute model {model} not found in catalog"
            )));
        }
        Ok(self.summary_scores.get(model))
    }

    /// Span score for the given attribute model, when the response included
    /// span-level data for it.
    pub fn span_score(&self, model: &str) -> Result<Option<&SpanScore>> {
        if self.state != CommentState::Analyzed {
            return Err(AnalyzerError::State(
                "cannot read span score from a comment that has not been analyzed".into(),
            ));
        }
        if !catalog::in_full_catalog(model) {
            return Err(AnalyzerError::Data(format!(
                "attribute model {model} not found in catalog"
            )));
        }
        Ok(self.span_scores.get(model))
    }

    /// Raw response body, readable only while the comment is in Submitted.
    pub fn raw_analysis_body(&self) -> Result<&str> {
        if self.state != CommentState::Submitted {
            return Err(AnalyzerError::State(
                "raw analysis body is only readable while the comment is submitted".into(),
            ));
        }
        self.raw_analysis_body.as_deref().ok_or_else(|| {
            AnalyzerError::State("no analysis response has been received yet".into())
        })
    }

    /// Parsed form of the raw response body, under the same state window as
    /// raw_analysis_body.
    pub fn analysis_data(&self) -> Result<serde_json::Value> {
        let raw = self.raw_analysis_body()?;
        serde_json::from_str(raw).map_err(|e| {
            AnalyzerError::Data(format!("malformed score data from Perspective API: {e}"))
        })
    }
}

// --- Perspective API response types ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    attribute_scores: HashMap<String, AttributeScoreEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributeScoreEntry {
    summary_score: ScoreEntry,
    #[serde(default)]
    span_scores: Vec<SpanScoreEntry>,
}

#[derive(Deserialize)]
struct ScoreEntry {
    value: f64,
    #[serde(rename = "type")]
    score_type: String,
}

#[derive(Deserialize)]
struct SpanScoreEntry {
    score: ScoreEntry,
    begin: usize,
    end: usize,
}
