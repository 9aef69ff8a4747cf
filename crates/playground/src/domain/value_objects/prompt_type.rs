//! PromptType - Prompt construction strategy

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Strategy used to wrap the user's text before it is sent upstream
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PromptType {
    /// Send the text as-is
    #[default]
    ZeroShot,
    /// Prefix two worked Q/A examples
    FewShot,
    /// Ask for step-by-step reasoning
    ChainOfThought,
}

impl PromptType {
    pub const ALL: [PromptType; 3] = [
        PromptType::ZeroShot,
        PromptType::FewShot,
        PromptType::ChainOfThought,
    ];

    /// Wire tag (`zero-shot`, `few-shot`, `chain-of-thought`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::ZeroShot => "zero-shot",
            PromptType::FewShot => "few-shot",
            PromptType::ChainOfThought => "chain-of-thought",
        }
    }

    /// Lenient lookup: unknown tags are treated as zero-shot.
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for PromptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PromptType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero-shot" => Ok(PromptType::ZeroShot),
            "few-shot" => Ok(PromptType::FewShot),
            "chain-of-thought" => Ok(PromptType::ChainOfThought),
            _ => Err(format!(
                "Unknown prompt type: {}. Valid: zero-shot, few-shot, chain-of-thought",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_kebab_case_tags() {
        let json = serde_json::to_string(&PromptType::ChainOfThought).unwrap();
        assert_eq!(json, "\"chain-of-thought\"");

        let parsed: PromptType = serde_json::from_str("\"few-shot\"").unwrap();
        assert_eq!(parsed, PromptType::FewShot);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_zero_shot() {
        assert_eq!(PromptType::from_tag_or_default("tree-of-thought"), PromptType::ZeroShot);
        assert_eq!(PromptType::from_tag_or_default("few-shot"), PromptType::FewShot);
        assert!("tree-of-thought".parse::<PromptType>().is_err());
    }

    #[test]
    fn test_display_matches_wire_tag() {
        for prompt_type in PromptType::ALL {
            let json = serde_json::to_string(&prompt_type).unwrap();
            assert_eq!(json, format!("\"{}\"", prompt_type));
        }
    }
}
