use serde::{Deserialize, Serialize};

/// Request-shaping variant, each mimicking a known calling site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Rich reply shape: `{ sentences: [{trans}], src, confidence }`
    /// (the jdict.net calling context)
    #[serde(alias = "jdict")]
    Structured,
    /// Nested-array reply shape: `[[["..."]], null, "src"]`
    /// (the mazii.net calling context)
    #[serde(alias = "mazii")]
    Compact,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Compact
    }
}

/// Inbound translation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate. Empty text is passed through, not rejected.
    pub text: String,
    /// Source language code, or "auto" for detection
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Target language code
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Which calling-site profile to mimic
    #[serde(default)]
    pub method: Variant,
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "vi".to_string()
}

/// Normalized translation outcome, returned for every request.
/// Success results never carry `error`; failure results carry only
/// the error description plus the echoed method and original text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub method: Variant,
    pub original_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn ok(
        translated_text: String,
        source_language: String,
        target_language: String,
        confidence: f64,
        method: Variant,
        original_text: String,
    ) -> Self {
        Self {
            success: true,
            translated_text: Some(translated_text),
            source_language: Some(source_language),
            target_language: Some(target_language),
            confidence: Some(confidence),
            method,
            original_text,
            error: None,
        }
    }

    pub fn failure(error: String, method: Variant, original_text: String) -> Self {
        Self {
            success: false,
            translated_text: None,
            source_language: None,
            target_language: None,
            confidence: None,
            method,
            original_text,
            error: Some(error),
        }
    }
}
