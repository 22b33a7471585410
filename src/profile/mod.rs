use crate::models::Variant;
use serde_json::Value;

/// Static per-variant configuration: the query-parameter template and the
/// referer/origin pair of the calling site the request should look like.
/// Selected once per call, never mutated.
pub struct AdapterProfile {
    pub variant: Variant,
    /// Client identifier sent as the `client` query parameter
    pub client: &'static str,
    /// Data-type flags requested from upstream (`dt` parameters)
    pub data_types: &'static [&'static str],
    /// Whether to request the dictionary-JSON reply shape (`dj=1`)
    pub dict_json: bool,
    /// Referer of the mimicked front-end site; also used (trailing slash
    /// stripped) as the Origin header
    pub referer: &'static str,
}

static STRUCTURED: AdapterProfile = AdapterProfile {
    variant: Variant::Structured,
    client: "gtx",
    data_types: &["t", "bd", "ex", "ld", "md", "qca", "rw", "rm", "ss", "at"],
    dict_json: true,
    referer: "https://jdict.net/",
};

static COMPACT: AdapterProfile = AdapterProfile {
    variant: Variant::Compact,
    client: "gtx",
    data_types: &["t"],
    dict_json: false,
    referer: "https://mazii.net/",
};

impl AdapterProfile {
    pub fn for_variant(variant: Variant) -> &'static AdapterProfile {
        match variant {
            Variant::Structured => &STRUCTURED,
            Variant::Compact => &COMPACT,
        }
    }

    /// Build the upstream query parameters for one request.
    /// `dt` is repeated once per requested data type.
    pub fn build_query(&self, text: &str, source_lang: &str, target_lang: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("client".to_string(), self.client.to_string()),
            ("sl".to_string(), source_lang.to_string()),
            ("tl".to_string(), target_lang.to_string()),
        ];
        for dt in self.data_types {
            params.push(("dt".to_string(), dt.to_string()));
        }
        if self.dict_json {
            params.push(("dj".to_string(), "1".to_string()));
        }
        params.push(("q".to_string(), text.to_string()));
        params
    }

    /// Pull the translated text, detected source language and confidence out
    /// of the variant-specific upstream reply. Missing pieces fall back to
    /// defaults rather than failing; a reply that is the wrong shape entirely
    /// yields an empty translation, not an error.
    pub fn extract(&self, body: &Value, requested_source: &str) -> Extraction {
        match self.variant {
            Variant::Structured => extract_structured(body, requested_source),
            Variant::Compact => extract_compact(body, requested_source),
        }
    }
}

/// Normalized fields pulled from an upstream reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub translated_text: String,
    pub source_language: String,
    pub confidence: f64,
}

// Structured reply: { sentences: [{trans: "..."}], src: "ja", confidence: 0.9 }
fn extract_structured(body: &Value, requested_source: &str) -> Extraction {
    let translated_text = body
        .get("sentences")
        .and_then(|s| s.get(0))
        .and_then(|s| s.get("trans"))
        .and_then(|t| t.as_str())
        .unwrap_or("")
        .to_string();

    let source_language = body
        .get("src")
        .and_then(|s| s.as_str())
        .unwrap_or(requested_source)
        .to_string();

    let confidence = body
        .get("confidence")
        .and_then(|c| c.as_f64())
        .unwrap_or(0.0);

    Extraction {
        translated_text,
        source_language,
        confidence,
    }
}

// Compact reply: [[["translation", "original", ...]], null, "ja"]
// Only read data[0][0][0] when data, data[0] and data[0][0] all exist and
// are non-empty. The compact shape carries no confidence signal, so the
// value is fixed at 1.0 and must not be read as a real score.
fn extract_compact(body: &Value, requested_source: &str) -> Extraction {
    let translated_text = body
        .get(0)
        .and_then(|v| v.get(0))
        .and_then(|v| v.get(0))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let source_language = body
        .as_array()
        .filter(|arr| arr.len() > 2)
        .and_then(|arr| arr[2].as_str())
        .unwrap_or(requested_source)
        .to_string();

    Extraction {
        translated_text,
        source_language,
        confidence: 1.0,
    }
}
