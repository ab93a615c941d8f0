// Attribute model catalog — the registry of scoring dimensions the API offers.
//
// A base set of standard models is always available. Two optional groups
// (experimental, nyt) bundle additional models that must be explicitly
// enabled on the analyzer before their models can be selected. The catalog
// is shared by the analyzer (model selection) and comments (score queries).

pub const MODEL_TOXICITY: &str = "TOXICITY";
pub const MODEL_SEVERE_TOXICITY: &str = "SEVERE_TOXICITY";
pub const MODEL_IDENTITY_ATTACK: &str = "IDENTITY_ATTACK";
pub const MODEL_INSULT: &str = "INSULT";
pub const MODEL_PROFANITY: &str = "PROFANITY";
pub const MODEL_THREAT: &str = "THREAT";

pub const MODEL_TOXICITY_EXPERIMENTAL: &str = "TOXICITY_EXPERIMENTAL";
pub const MODEL_SEVERE_TOXICITY_EXPERIMENTAL: &str = "SEVERE_TOXICITY_EXPERIMENTAL";
pub const MODEL_IDENTITY_ATTACK_EXPERIMENTAL: &str = "IDENTITY_ATTACK_EXPERIMENTAL";
pub const MODEL_INSULT_EXPERIMENTAL: &str = "INSULT_EXPERIMENTAL";
pub const MODEL_PROFANITY_EXPERIMENTAL: &str = "PROFANITY_EXPERIMENTAL";
pub const MODEL_THREAT_EXPERIMENTAL: &str = "THREAT_EXPERIMENTAL";
pub const MODEL_SEXUALLY_EXPLICIT: &str = "SEXUALLY_EXPLICIT";
pub const MODEL_FLIRTATION: &str = "FLIRTATION";

pub const MODEL_ATTACK_ON_AUTHOR: &str = "ATTACK_ON_AUTHOR";
pub const MODEL_ATTACK_ON_COMMENTER: &str = "ATTACK_ON_COMMENTER";
pub const MODEL_INCOHERENT: &str = "INCOHERENT";
pub const MODEL_INFLAMMATORY: &str = "INFLAMMATORY";
pub const MODEL_LIKELY_TO_REJECT: &str = "LIKELY_TO_REJECT";
pub const MODEL_OBSCENE: &str = "OBSCENE";
pub const MODEL_SPAM: &str = "SPAM";
pub const MODEL_UNSUBSTANTIAL: &str = "UNSUBSTANTIAL";

/// Models available without enabling any optional group.
pub const STANDARD_MODELS: &[&str] = &[
    MODEL_TOXICITY,
    MODEL_SEVERE_TOXICITY,
    MODEL_IDENTITY_ATTACK,
    MODEL_INSULT,
    MODEL_PROFANITY,
    MODEL_THREAT,
];

/// Models unlocked by the `experimental` group.
pub const EXPERIMENTAL_MODELS: &[&str] = &[
    MODEL_TOXICITY_EXPERIMENTAL,
    MODEL_SEVERE_TOXICITY_EXPERIMENTAL,
    MODEL_IDENTITY_ATTACK_EXPERIMENTAL,
    MODEL_INSULT_EXPERIMENTAL,
    MODEL_PROFANITY_EXPERIMENTAL,
    MODEL_THREAT_EXPERIMENTAL,
    MODEL_SEXUALLY_EXPLICIT,
    MODEL_FLIRTATION,
];

/// Models unlocked by the `nyt` group (trained on New York Times comments).
pub const NYT_MODELS: &[&str] = &[
    MODEL_ATTACK_ON_AUTHOR,
    MODEL_ATTACK_ON_COMMENTER,
    MODEL_INCOHERENT,
    MODEL_INFLAMMATORY,
    MODEL_LIKELY_TO_REJECT,
    MODEL_OBSCENE,
    MODEL_SPAM,
    MODEL_UNSUBSTANTIAL,
];

/// An optional bundle of attribute models that must be enabled before its
/// models can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelGroup {
    Experimental,
    Nyt,
}

impl ModelGroup {
    pub const ALL: [ModelGroup; 2] = [ModelGroup::Experimental, ModelGroup::Nyt];

    /// Resolve a group from its lower-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "experimental" => Some(ModelGroup::Experimental),
            "nyt" => Some(ModelGroup::Nyt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelGroup::Experimental => "experimental",
            ModelGroup::Nyt => "nyt",
        }
    }

    /// The models this group unlocks.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            ModelGroup::Experimental => EXPERIMENTAL_MODELS,
            ModelGroup::Nyt => NYT_MODELS,
        }
    }
}

impl std::fmt::Display for ModelGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True for models available without enabling any optional group.
pub fn is_standard(model: &str) -> bool {
    STANDARD_MODELS.contains(&model)
}

/// True when the model exists anywhere in the catalog, whether or not its
/// group is currently enabled.
pub fn in_full_catalog(model: &str) -> bool {
    is_standard(model) || ModelGroup::ALL.iter().any(|group| group.models().contains(&model))
}
