pub mod grok;
pub mod images;
pub mod prompts;

use serde_json::Value;

// ── Types ─────────────────────────────────────────────

/// Error from an upstream AI service.
#[derive(Debug)]
pub struct AiError(pub String);

impl std::fmt::Display for AiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Helpers ───────────────────────────────────────────

/// Extract JSON from LLM response text (handles markdown fences and prose
/// around the object).
pub fn parse_json_from_text(text: &str) -> Option<Value> {
    log::debug!("AI raw response ({} bytes)", text.len());

    // Try direct parse first
    if let Ok(v) = serde_json::from_str::<Value>(text.trim()) {
        return Some(v);
    }

    // Try to find JSON within markdown code fences
    let stripped = text.replace("```json", "").replace("```", "");
    if let Ok(v) = serde_json::from_str::<Value>(stripped.trim()) {
        return Some(v);
    }

    // Try to find first { ... } block (handle nested braces)
    if let Some(start) = text.find('{') {
        let mut depth = 0;
        let mut end_pos = None;
        for (i, ch) in text[start..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = Some(start + i);
                        break;
                    }
                }
                _ => {}
            }
        }
        if let Some(end) = end_pos {
            if let Ok(v) = serde_json::from_str::<Value>(&text[start..=end]) {
                return Some(v);
            }
        }
    }

    None
}

/// A post draft parsed from the text model's JSON output.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub reading_time: i64,
}

impl PostDraft {
    /// Maps the model's `{title, excerpt, content, keywords[], readingTime}`
    /// shape onto a draft. A draft without a title is a parse failure;
    /// everything else defaults.
    pub fn from_text(text: &str) -> Option<Self> {
        let parsed = parse_json_from_text(text)?;

        let title = parsed
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim()
            .to_string();
        if title.is_empty() {
            return None;
        }

        Some(PostDraft {
            title,
            excerpt: parsed
                .get("excerpt")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            content: parsed
                .get("content")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            keywords: parsed
                .get("keywords")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|k| k.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
            reading_time: parsed
                .get("readingTime")
                .and_then(|v| v.as_i64())
                .unwrap_or(3),
        })
    }
}
