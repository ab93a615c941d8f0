// Unit tests for the Comment lifecycle state machine and response parsing.
//
// Exercises the Created -> Submitted -> Analyzed progression, the terminal
// state guard, score parsing from raw JSON bodies, and the state windows on
// every accessor, all without an analyzer or network access.

use comment_analyzer::comment::{Comment, CommentState};
use comment_analyzer::error::AnalyzerError;

const TOXICITY_BODY: &str = r#"{
    "attributeScores": {
        "TOXICITY": {
            "summaryScore": {"value": 0.87, "type": "PROBABILITY"}
        }
    }
}"#;

// ============================================================
// State machine
// ============================================================

#[test]
fn new_comment_starts_created() {
    let comment = Comment::new("Hello my good sir, how are you this fine evening?");
    assert_eq!(comment.state(), CommentState::Created);
    assert_eq!(
        comment.text(),
        "Hello my good sir, how are you this fine evening?"
    );
}

#[test]
fn set_state_forward() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    assert_eq!(comment.state(), CommentState::Submitted);
}

#[test]
fn set_state_is_permissive_below_terminal() {
    // Backward and same-state transitions are allowed until Analyzed;
    // forward-only ordering comes from the analyze call sequence.
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_state(CommentState::Created).unwrap();
    assert_eq!(comment.state(), CommentState::Created);
    comment.set_state(CommentState::Created).unwrap();
}

#[test]
fn analyzed_state_is_terminal() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(TOXICITY_BODY).unwrap();
    assert_eq!(comment.state(), CommentState::Analyzed);

    let err = comment.set_state(CommentState::Created).unwrap_err();
    assert!(matches!(err, AnalyzerError::State(_)));

    let err = comment.set_analysis(TOXICITY_BODY).unwrap_err();
    assert!(matches!(err, AnalyzerError::State(_)));
}

#[test]
fn set_analysis_requires_submitted() {
    let mut comment = Comment::new("hi");
    let err = comment.set_analysis(TOXICITY_BODY).unwrap_err();
    assert!(matches!(err, AnalyzerError::State(_)));
    assert_eq!(comment.state(), CommentState::Created);
}

#[test]
fn state_display_names() {
    assert_eq!(CommentState::Created.to_string(), "created");
    assert_eq!(CommentState::Submitted.to_string(), "submitted");
    assert_eq!(CommentState::Analyzed.to_string(), "analyzed");
}

// ============================================================
// Response parsing
// ============================================================

#[test]
fn parse_summary_score() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(TOXICITY_BODY).unwrap();

    let score = comment.summary_score("TOXICITY").unwrap().unwrap();
    assert_eq!(score.value, 0.87);
    assert_eq!(score.score_type, "PROBABILITY");
}

#[test]
fn parse_span_scores_last_entry_wins() {
    // Multiple span entries for one attribute collapse to the last one
    let body = r#"{
        "attributeScores": {
            "TOXICITY": {
                "summaryScore": {"value": 0.9, "type": "PROBABILITY"},
                "spanScores": [
                    {"score": {"value": 0.4, "type": "PROBABILITY"}, "begin": 0, "end": 5},
                    {"score": {"value": 0.95, "type": "PROBABILITY"}, "begin": 6, "end": 17}
                ]
            }
        }
    }"#;

    let mut comment = Comment::new("fine, you idiot");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(body).unwrap();

    let span = comment.span_score("TOXICITY").unwrap().unwrap();
    assert_eq!(span.value, 0.95);
    assert_eq!(span.begin, 6);
    assert_eq!(span.end, 17);
}

#[test]
fn attribute_without_spans_has_no_span_score() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(TOXICITY_BODY).unwrap();

    assert!(comment.span_score("TOXICITY").unwrap().is_none());
}

#[test]
fn missing_attribute_scores_is_data_error() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();

    let err = comment.set_analysis(r#"{"languages": ["en"]}"#).unwrap_err();
    assert!(matches!(err, AnalyzerError::Data(_)));
    // The comment stays submitted so the body remains inspectable
    assert_eq!(comment.state(), CommentState::Submitted);
}

#[test]
fn invalid_json_is_data_error() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();

    let err = comment.set_analysis("not json at all").unwrap_err();
    assert!(matches!(err, AnalyzerError::Data(_)));
    assert_eq!(comment.state(), CommentState::Submitted);
}

// ============================================================
// Score accessors — state windows and catalog checks
// ============================================================

#[test]
fn scores_unreadable_before_analysis() {
    let comment = Comment::new("hi");
    assert!(matches!(
        comment.summary_score("TOXICITY").unwrap_err(),
        AnalyzerError::State(_)
    ));
    assert!(matches!(
        comment.span_score("TOXICITY").unwrap_err(),
        AnalyzerError::State(_)
    ));

    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    assert!(matches!(
        comment.summary_score("TOXICITY").unwrap_err(),
        AnalyzerError::State(_)
    ));
}

#[test]
fn unknown_model_query_is_data_error() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(TOXICITY_BODY).unwrap();

    assert!(matches!(
        comment.summary_score("NOT_A_MODEL").unwrap_err(),
        AnalyzerError::Data(_)
    ));
    assert!(matches!(
        comment.span_score("NOT_A_MODEL").unwrap_err(),
        AnalyzerError::Data(_)
    ));
}

#[test]
fn unrequested_model_returns_none_not_error() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(TOXICITY_BODY).unwrap();

    // INSULT is a valid catalog model that was never requested
    assert!(comment.summary_score("INSULT").unwrap().is_none());
    // Optional-group models are queryable too, enabled groups or not
    assert!(comment.summary_score("FLIRTATION").unwrap().is_none());
    assert!(comment.summary_score("SPAM").unwrap().is_none());
}

// ============================================================
// Raw body window
// ============================================================

#[test]
fn raw_body_unreadable_before_submission() {
    let comment = Comment::new("hi");
    assert!(matches!(
        comment.raw_analysis_body().unwrap_err(),
        AnalyzerError::State(_)
    ));
}

#[test]
fn raw_body_unreadable_when_submitted_without_response() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    assert!(matches!(
        comment.raw_analysis_body().unwrap_err(),
        AnalyzerError::State(_)
    ));
}

#[test]
fn raw_body_readable_after_failed_parse() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();

    let body = r#"{"languages": ["en"]}"#;
    comment.set_analysis(body).unwrap_err();

    assert_eq!(comment.raw_analysis_body().unwrap(), body);
    let data = comment.analysis_data().unwrap();
    assert_eq!(data["languages"][0], "en");
}

#[test]
fn raw_body_window_closes_at_analyzed() {
    let mut comment = Comment::new("hi");
    comment.set_state(CommentState::Submitted).unwrap();
    comment.set_analysis(TOXICITY_BODY).unwrap();

    assert!(matches!(
        comment.raw_analysis_body().unwrap_err(),
        AnalyzerError::State(_)
    ));
    assert!(matches!(
        comment.analysis_data().unwrap_err(),
        AnalyzerError::State(_)
    ));
}
