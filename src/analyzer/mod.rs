// Perspective API analyzer — configuration and the analyze flow.
//
// The analyzer holds the API key, the set of enabled attribute models and
// optional model groups, and language hints. Each analyze call validates the
// configuration, performs exactly one HTTP POST, and feeds the raw response
// into the Comment. No caching, retries, rate limiting, or batching at this
// layer; sequencing is the caller's concern.

pub mod transport;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;
use tracing::{debug, error};

use crate::catalog::{self, ModelGroup};
use crate::comment::{Comment, CommentState};
use crate::error::{AnalyzerError, Result};
use self::transport::{AnalyzeTransport, HttpTransport};

/// Fixed analysis endpoint. The API key goes in the `key` query parameter.
pub const API_URL: &str = "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";

pub struct Analyzer {
    api_key: String,
    transport: Box<dyn AnalyzeTransport>,
    attribute_models: BTreeSet<String>,
    enabled_groups: HashSet<ModelGroup>,
    // Empty set means the API auto-detects the comment language
    languages: BTreeSet<String>,
}

impl Analyzer {
    /// Create an analyzer that talks to the real Perspective API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, Box::new(HttpTransport::new()))
    }

    /// Create an analyzer with an injected transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: Box<dyn AnalyzeTransport>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            transport,
            attribute_models: BTreeSet::new(),
            enabled_groups: HashSet::new(),
            languages: BTreeSet::new(),
        }
    }

    /// Add a comment language hint (ISO 639-1 two-letter code).
    /// Codes are not validated here; the API rejects unknown ones.
    pub fn add_language(&mut self, code: &str) {
        self.languages.insert(code.to_string());
    }

    /// Remove a previously added language hint.
    pub fn remove_language(&mut self, code: &str) {
        self.languages.remove(code);
    }

    /// Enable one or more optional model groups by name ("experimental", "nyt").
    ///
    /// WARNING: optional-group models are not as robustly trained as the
    /// standard models and should be used with caution.
    pub fn enable_model_groups(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            let group = Self::resolve_group(name)?;
            self.enabled_groups.insert(group);
        }
        Ok(())
    }

    /// Disable one or more optional model groups, dropping any enabled
    /// attribute models that exist only in those groups' catalogs.
    pub fn disable_model_groups(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            let group = Self::resolve_group(name)?;
            self.enabled_groups.remove(&group);
            self.attribute_models
                .retain(|model| !group.models().contains(&model.as_str()));
        }
        Ok(())
    }

    fn resolve_group(name: &str) -> Result<ModelGroup> {
        ModelGroup::from_name(name).ok_or_else(|| {
            AnalyzerError::Configuration(format!("unknown optional model group: \"{name}\""))
        })
    }

    /// Add an attribute model to those future comments will be scored by.
    ///
    /// Adding a model twice is a no-op. Optional-group models require their
    /// group to be enabled first.
    pub fn add_attribute_model(&mut self, model: &str) -> Result<()> {
        let available = catalog::is_standard(model)
            || self
                .enabled_groups
                .iter()
                .any(|group| group.models().contains(&model));
        if !available {
            return Err(AnalyzerError::Configuration(format!(
                "trying to enable an unsupported model: \"{model}\""
            )));
        }
        self.attribute_models.insert(model.to_string());
        Ok(())
    }

    /// Remove an attribute model from scoring of future comments.
    ///
    /// Removing an absent model is a no-op, but the name must exist in the
    /// full catalog, whether or not its group is enabled.
    pub fn remove_attribute_model(&mut self, model: &str) -> Result<()> {
        if !catalog::in_full_catalog(model) {
            return Err(AnalyzerError::Configuration(format!(
                "trying to remove an unsupported model: \"{model}\""
            )));
        }
        self.attribute_models.remove(model);
        Ok(())
    }

    /// Currently enabled attribute models, in sorted order.
    pub fn attribute_models(&self) -> impl Iterator<Item = &str> + '_ {
        self.attribute_models.iter().map(String::as_str)
    }

    /// Analyze a comment and fill out its scoring data.
    ///
    /// Drives the comment Created -> Submitted -> Analyzed. On an API
    /// failure the comment is left in Submitted with no scores.
    pub async fn analyze(&self, comment: &mut Comment) -> Result<()> {
        if self.attribute_models.is_empty() {
            return Err(AnalyzerError::Configuration(
                "trying to analyze a comment with no attribute models enabled".into(),
            ));
        }

        comment.set_state(CommentState::Submitted)?;

        let request = self.build_request(comment);
        let body = serde_json::to_value(&request).map_err(|e| {
            AnalyzerError::Data(format!("failed to serialize analyze request: {e}"))
        })?;
        let url = format!("{}?key={}", API_URL, self.api_key);

        let response = match self.transport.post_json(&url, &body).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Call to Perspective API failed");
                return Err(AnalyzerError::Api {
                    message: format!("call to Perspective API failed: {e}"),
                    status: None,
                    body: None,
                });
            }
        };

        if !(200..300).contains(&response.status) {
            error!(
                status = response.status,
                body = %response.body,
                "Perspective API returned an error status"
            );
            return Err(AnalyzerError::Api {
                message: format!("call to Perspective API failed: HTTP {}", response.status),
                status: Some(response.status),
                body: Some(response.body),
            });
        }

        comment.set_analysis(&response.body)?;

        debug!(
            models = self.attribute_models.len(),
            "Comment analyzed"
        );

        Ok(())
    }

    fn build_request(&self, comment: &Comment) -> AnalyzeRequest {
        // The languages key is omitted entirely when no hints are configured
        let languages = if self.languages.is_empty() {
            None
        } else {
            Some(self.languages.iter().cloned().collect())
        };

        let requested_attributes = self
            .attribute_models
            .iter()
            .map(|model| (model.clone(), AttributeConfig {}))
            .collect();

        AnalyzeRequest {
            comment: CommentPayload {
                text: comment.text().to_string(),
            },
            languages,
            requested_attributes,
        }
    }
}

// --- Perspective API request types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    comment: CommentPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    languages: Option<Vec<String>>,
    requested_attributes: BTreeMap<String, AttributeConfig>,
}

#[derive(Serialize)]
struct CommentPayload {
    text: String,
}

// Per-attribute tuning is not supported; every requested attribute is an
// empty configuration object.
#[derive(Serialize)]
struct AttributeConfig {}
