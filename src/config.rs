//! Configuration for the inference endpoint and the plugin settings

use std::fmt;
use serde::{Deserialize, Serialize};

/// Hosted inference API root
pub const DEFAULT_API_BASE: &str
  = "https://api-inference.huggingface.co";

/// Model the plugin queries unless told otherwise
pub const DEFAULT_MODEL: &str = "google/flan-t5-large";

/// Fallback query used when the turn carries no text
pub const DEFAULT_RESPONSE: &str
  = "I couldn't process your request. Please try again or provide a valid command.";

/// Inference endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig
{   /// API base URL
    pub api_base: String
  , /// Model identifier, appended to `{api_base}/models/`
    pub model: String
  , /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>
}

impl Default for InferenceConfig
{   fn default() -> Self
    {   InferenceConfig
        {   api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , timeout_secs: None
        }
    }
}

/// Per-invocation plugin settings, resolved by the host from block arguments
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSettings
{   /// Bearer token for the inference endpoint
    #[serde(default)]
    pub llm_api_key: Option<String>
  , /// Query used when the turn has no text
    #[serde(default = "default_response")]
    pub default_response: String
}

fn default_response() -> String
{   DEFAULT_RESPONSE.to_string()
}

impl PluginSettings
{   /// Build settings from an API key and the stock default response
    pub fn with_api_key(key: impl Into<String>) -> Self
    {   PluginSettings
        {   llm_api_key: Some(key.into())
          , default_response: default_response()
        }
    }

    /// Parse settings from the host's block arguments
    pub fn from_args(args: serde_json::Value)
      -> Result<Self, crate::error::Error>
    {   serde_json::from_value(args).map_err(|e| {
          crate::error::Error::InvalidConfiguration(e.to_string())
        })
    }

    /// The API key, if one is set and non-empty
    pub fn api_key(&self) -> Option<&str>
    {   self.llm_api_key
          .as_deref()
          .filter(|k| !k.is_empty())
    }
}

impl Default for PluginSettings
{   fn default() -> Self
    {   PluginSettings
        {   llm_api_key: None
          , default_response: default_response()
        }
    }
}

impl fmt::Debug for PluginSettings
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("PluginSettings")
          .field(
            "llm_api_key",
            &self.llm_api_key.as_ref().map(|_| "<redacted>")
          )
          .field("default_response", &self.default_response)
          .finish()
    }
}

/// Kind of input the host renders for a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingType
{   Text
  , Secret
}

/// One entry of a plugin's declared settings schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSpec
{   pub label: String
  , pub group: String
  , #[serde(rename = "type")]
    pub kind: SettingType
  , pub value: String
}

impl SettingSpec
{   pub fn text(label: &str, group: &str, value: &str) -> Self
    {   SettingSpec
        {   label: label.to_string()
          , group: group.to_string()
          , kind: SettingType::Text
          , value: value.to_string()
        }
    }
}

/// Settings schema of the book plugin
pub fn book_plugin_settings() -> Vec<SettingSpec>
{   vec![
      SettingSpec::text("llm_api_key", "API Settings", "")
    , SettingSpec::text(
        "default_response",
        "General Settings",
        DEFAULT_RESPONSE
      )
    ]
}
