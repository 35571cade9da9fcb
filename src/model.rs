//! Provider and model types.

use serde::Deserialize;

/// Id patterns that mark a model as embedding-only.
const EMBEDDING_PREFIXES: &[&str] = &["text-"];
const EMBEDDING_FRAGMENTS: &[&str] = &[
    "embed",
    "bge-",
    "e5-",
    "llm2vec",
    "retrieval",
    "uae-",
    "gte-",
    "jina-clip",
    "jina-embeddings",
];

/// Capability tags shown next to a model name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCapability {
    Vision,
    Reasoning,
    FunctionCalling,
    WebSearch,
    Free,
}

impl ModelCapability {
    pub fn tag(&self) -> &'static str {
        match self {
            ModelCapability::Vision => "vision",
            ModelCapability::Reasoning => "think",
            ModelCapability::FunctionCalling => "tools",
            ModelCapability::WebSearch => "web",
            ModelCapability::Free => "free",
        }
    }
}

/// A model offered by a provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    /// Group label used as the primary sort key inside a provider
    #[serde(default)]
    pub group: String,
    /// Owning provider id. Filled in from the enclosing provider when loading a catalog.
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub embedding: bool,
    #[serde(default)]
    pub capabilities: Vec<ModelCapability>,
}

impl Model {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: String::new(),
            provider: provider.into(),
            embedding: false,
            capabilities: vec![],
        }
    }

    #[cfg(test)]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    #[cfg(test)]
    pub fn with_embedding(mut self, embedding: bool) -> Self {
        self.embedding = embedding;
        self
    }

    #[cfg(test)]
    pub fn with_capabilities(mut self, capabilities: Vec<ModelCapability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Identifier that is unique across providers.
    ///
    /// The same model id may be served by several providers, so the id is
    /// combined with the provider into a small JSON object.
    pub fn uniq_id(&self) -> String {
        serde_json::json!({ "id": self.id, "provider": self.provider }).to_string()
    }

    /// Whether this model only produces embeddings and cannot be mentioned.
    pub fn is_embedding(&self) -> bool {
        if self.embedding {
            return true;
        }
        let id = self.id.to_lowercase();
        EMBEDDING_PREFIXES.iter().any(|p| id.starts_with(p))
            || EMBEDDING_FRAGMENTS.iter().any(|f| id.contains(f))
    }

    /// Single character used in place of a logo.
    pub fn avatar(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// An upstream vendor and the models it serves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    /// Built-in providers get their label from the translator
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub models: Vec<Model>,
}

#[cfg(test)]
impl Provider {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_system: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_system,
            models: vec![],
        }
    }

    /// Add a model, stamping it with this provider's id.
    pub fn with_model(mut self, mut model: Model) -> Self {
        model.provider = self.id.clone();
        self.models.push(model);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniq_id_includes_provider() {
        let a = Model::new("gpt-4o", "GPT-4o", "openai");
        let b = Model::new("gpt-4o", "GPT-4o", "azure");
        assert_ne!(a.uniq_id(), b.uniq_id());
        assert_eq!(a.uniq_id(), r#"{"id":"gpt-4o","provider":"openai"}"#);
    }

    #[test]
    fn test_embedding_detection() {
        assert!(Model::new("text-embedding-3-small", "Embed", "openai").is_embedding());
        assert!(Model::new("BAAI/bge-m3", "BGE", "silicon").is_embedding());
        assert!(Model::new("jina-embeddings-v3", "Jina", "jina").is_embedding());
        assert!(Model::new("custom", "Custom", "p").with_embedding(true).is_embedding());
        assert!(!Model::new("gpt-4o", "GPT-4o", "openai").is_embedding());
        assert!(!Model::new("claude-3-5-sonnet", "Sonnet", "anthropic").is_embedding());
    }

    #[test]
    fn test_with_model_sets_provider() {
        let provider = Provider::new("p1", "P1", false).with_model(Model::new("m1", "Alpha", ""));
        assert_eq!(provider.models[0].provider, "p1");
    }

    #[test]
    fn test_avatar() {
        assert_eq!(Model::new("m", "alpha", "p").avatar(), 'A');
        assert_eq!(Model::new("m", "", "p").avatar(), '?');
    }
}
