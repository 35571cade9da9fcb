//! String lookup for user-facing labels.

use std::collections::HashMap;

/// Label of the synthetic group holding pinned models
pub const PINNED_GROUP_KEY: &str = "models.pinned";
/// Tooltip shown under the toolbar trigger
pub const TRIGGER_TOOLTIP_KEY: &str = "mention.tooltip";

const DEFAULTS: &[(&str, &str)] = &[
    (PINNED_GROUP_KEY, "Pinned"),
    (TRIGGER_TOOLTIP_KEY, "Mention models"),
    ("provider.openai", "OpenAI"),
    ("provider.anthropic", "Anthropic"),
    ("provider.gemini", "Gemini"),
    ("provider.deepseek", "DeepSeek"),
    ("provider.ollama", "Ollama"),
    ("provider.openrouter", "OpenRouter"),
    ("provider.silicon", "SiliconFlow"),
    ("provider.mistral", "Mistral"),
];

/// Key lookup with built-in defaults and user overrides.
///
/// Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    overrides: HashMap<String, String>,
}

impl Translator {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn t(&self, key: &str) -> String {
        if let Some(value) = self.overrides.get(key) {
            return value.clone();
        }
        DEFAULTS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Display label of a built-in provider.
    pub fn provider_name(&self, provider_id: &str) -> String {
        self.t(&format!("provider.{}", provider_id))
    }
}
