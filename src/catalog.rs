//! Provider catalog loading.
//!
//! Providers and their models are read from a TOML file. When no catalog is
//! configured, or the configured one does not exist, a small built-in catalog
//! is used instead.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::model::Provider;

const DEFAULT_CATALOG: &str = r#"
[[providers]]
id = "openai"
name = "OpenAI"
is_system = true

  [[providers.models]]
  id = "gpt-4o"
  name = "GPT-4o"
  group = "GPT 4o"
  capabilities = ["vision", "function_calling"]

  [[providers.models]]
  id = "gpt-4o-mini"
  name = "GPT-4o mini"
  group = "GPT 4o"
  capabilities = ["vision", "function_calling"]

  [[providers.models]]
  id = "o3-mini"
  name = "o3-mini"
  group = "o3"
  capabilities = ["reasoning"]

  [[providers.models]]
  id = "text-embedding-3-small"
  name = "text-embedding-3-small"
  group = "Embeddings"

[[providers]]
id = "anthropic"
name = "Anthropic"
is_system = true

  [[providers.models]]
  id = "claude-3-5-sonnet-latest"
  name = "Claude 3.5 Sonnet"
  group = "Claude 3.5"
  capabilities = ["vision", "function_calling"]

  [[providers.models]]
  id = "claude-3-5-haiku-latest"
  name = "Claude 3.5 Haiku"
  group = "Claude 3.5"
  capabilities = ["function_calling"]

[[providers]]
id = "deepseek"
name = "DeepSeek"
is_system = true

  [[providers.models]]
  id = "deepseek-chat"
  name = "DeepSeek V3"
  group = "DeepSeek"

  [[providers.models]]
  id = "deepseek-reasoner"
  name = "DeepSeek R1"
  group = "DeepSeek"
  capabilities = ["reasoning"]

[[providers]]
id = "local-ollama"
name = "My Ollama"

  [[providers.models]]
  id = "llama3.2"
  name = "Llama 3.2"
  group = "llama3.2"
  capabilities = ["free"]

  [[providers.models]]
  id = "nomic-embed-text"
  name = "Nomic Embed"
  group = "nomic"
"#;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    providers: Vec<Provider>,
}

/// Parse a catalog from TOML text.
pub fn parse(contents: &str) -> CatalogResult<Vec<Provider>> {
    let file: CatalogFile = toml::from_str(contents)?;
    Ok(file
        .providers
        .into_iter()
        .map(|mut provider| {
            for model in &mut provider.models {
                model.provider = provider.id.clone();
            }
            provider
        })
        .collect())
}

/// Load the catalog at `path`, or the built-in one if `path` is absent.
pub fn load(path: Option<&Path>) -> CatalogResult<Vec<Provider>> {
    match path {
        Some(path) if path.exists() => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
            parse(&contents)
        }
        Some(path) => {
            crate::log::log(&format!(
                "Catalog {} not found, using built-in providers",
                path.display()
            ));
            builtin()
        }
        None => builtin(),
    }
}

pub fn builtin() -> CatalogResult<Vec<Provider>> {
    parse(DEFAULT_CATALOG)
}
