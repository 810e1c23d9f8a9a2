use serde::Serialize;

/// Canonical set of prediction models: four forecasters plus the consensus
/// aggregator. Generic listings exclude the aggregator; it is only shown in
/// match detail and in its own model view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AiModel {
    Gemini,
    #[serde(rename = "ChatGPT")]
    ChatGpt,
    Grok,
    #[serde(rename = "ML")]
    Ml,
    Consensus,
}

impl AiModel {
    pub const FORECASTERS: [AiModel; 4] = [
        AiModel::Gemini,
        AiModel::ChatGpt,
        AiModel::Grok,
        AiModel::Ml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AiModel::Gemini => "Gemini",
            AiModel::ChatGpt => "ChatGPT",
            AiModel::Grok => "Grok",
            AiModel::Ml => "ML",
            AiModel::Consensus => "Consensus",
        }
    }

    pub fn is_aggregator(self) -> bool {
        self == AiModel::Consensus
    }

    /// Map an upstream model name onto the canonical set, absorbing the
    /// misspellings and casing variants the feed is known to produce. The
    /// feed brands its aggregator "BangaBot"; that maps to `Consensus`.
    /// Unknown names return `None`; the provider drops those predictions.
    pub fn from_upstream(raw: &str) -> Option<AiModel> {
        match raw.trim() {
            "Germini" => return Some(AiModel::Gemini),
            "Chat GPT" | "gpt" => return Some(AiModel::ChatGpt),
            "ML Model" => return Some(AiModel::Ml),
            _ => {}
        }
        match raw.trim().to_lowercase().as_str() {
            "gemini" => Some(AiModel::Gemini),
            "chatgpt" => Some(AiModel::ChatGpt),
            "grok" => Some(AiModel::Grok),
            "ml" => Some(AiModel::Ml),
            "consensus" | "bangabot" => Some(AiModel::Consensus),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AiModel;

    #[test]
    fn known_variants_normalize() {
        assert_eq!(AiModel::from_upstream("Germini"), Some(AiModel::Gemini));
        assert_eq!(AiModel::from_upstream("Chat GPT"), Some(AiModel::ChatGpt));
        assert_eq!(AiModel::from_upstream("chatgpt"), Some(AiModel::ChatGpt));
        assert_eq!(AiModel::from_upstream("gpt"), Some(AiModel::ChatGpt));
        assert_eq!(AiModel::from_upstream("ML Model"), Some(AiModel::Ml));
        assert_eq!(AiModel::from_upstream(" grok "), Some(AiModel::Grok));
        assert_eq!(AiModel::from_upstream("BangaBot"), Some(AiModel::Consensus));
        assert_eq!(AiModel::from_upstream("bangabot"), Some(AiModel::Consensus));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(AiModel::from_upstream("OracleX"), None);
        assert_eq!(AiModel::from_upstream(""), None);
    }

    #[test]
    fn only_consensus_aggregates() {
        for model in AiModel::FORECASTERS {
            assert!(!model.is_aggregator());
        }
        assert!(AiModel::Consensus.is_aggregator());
    }
}
