//! Block plugins: the book plugin and the contract it fulfils

use log::{debug, error, info};
use crate::config::{InferenceConfig, PluginSettings, SettingSpec};
use crate::error::Error;
use crate::providers::HuggingFaceClient;
use crate::request::{create_error_message, BlockTemplate, Envelope, Turn};

const BOOK_CONTEXT: &str = "You are a knowledgeable assistant specialized in books.
If the query is about book recommendations, suggest relevant books with brief descriptions.
If the query is about a specific book, provide a concise summary and key insights.";

/// Capability shared by every block-processing component.
///
/// The host resolves settings for the block and passes them in on each
/// call; implementations keep no state between invocations.
#[allow(async_fn_in_trait)]
pub trait BlockPlugin
{   /// Stable identifier the host registers the plugin under
    fn name(&self) -> &str;

    fn template(&self) -> BlockTemplate;

    /// Declared settings schema
    fn settings(&self) -> Vec<SettingSpec>;

    /// Handle one turn. Always yields exactly one envelope.
    async fn process(
      &self
    , turn: &Turn
    , settings: &PluginSettings
    ) -> Envelope;
}

/// Answers book questions through a hosted text-generation model
#[derive(Debug, Clone)]
pub struct BookPlugin
{   client: HuggingFaceClient
}

impl BookPlugin
{   pub fn new(config: &InferenceConfig) -> Result<Self, Error>
    {   info!("Creating BookPlugin against model: {}", config.model);
        Ok(BookPlugin
        {   client: HuggingFaceClient::new(config)?
        })
    }

    pub fn client(&self) -> &HuggingFaceClient
    {   &self.client
    }

    async fn answer(
      &self
    , turn: &Turn
    , settings: &PluginSettings
    ) -> Result<String, Error>
    {   let query = resolve_query(turn, settings);

        let api_key = settings.api_key().ok_or_else(|| {
          debug!("Rejecting turn: no API key configured");
          Error::MissingApiKey
        })?;

        if query.trim().is_empty()
        {   debug!("Rejecting turn: empty query");
            return Err(Error::InvalidInput);
        }

        self.client
          .generate(api_key, build_prompt(query))
          .await
          .map_err(|e| {
            error!("Error while fetching data from LLM API: {}", e);
            e
          })
    }
}

impl BlockPlugin for BookPlugin
{   fn name(&self) -> &str
    {   "book-plugin"
    }

    fn template(&self) -> BlockTemplate
    {   BlockTemplate
        {   name: "Book Plugin".to_string()
        }
    }

    fn settings(&self) -> Vec<SettingSpec>
    {   crate::config::book_plugin_settings()
    }

    async fn process(
      &self
    , turn: &Turn
    , settings: &PluginSettings
    ) -> Envelope
    {   debug!("Processing turn for {}", self.name());
        match self.answer(turn, settings).await
        {   Ok(text) => Envelope::text(text)
          , Err(e) => create_error_message(&e)
        }
    }
}

/// Turn text when it has content, otherwise the configured default response
pub fn resolve_query<'a>(
  turn: &'a Turn
, settings: &'a PluginSettings
) -> &'a str
{   turn.non_blank_text()
      .unwrap_or(&settings.default_response)
}

/// Frame `query` with the book-assistant context
pub fn build_prompt(query: &str) -> String
{   format!(
      "Answer based on this context: {}\n---\nQuery: {}\nAnswer:",
      BOOK_CONTEXT, query
    )
}
