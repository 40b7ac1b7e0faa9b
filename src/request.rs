//! Turn and envelope types exchanged with the host framework

use serde::{Deserialize, Serialize};

/// The conversational turn handed to a block plugin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Turn
{   /// Free-text user utterance, if the turn carries one
    #[serde(default)]
    pub text: Option<String>
}

impl Turn
{   pub fn new(text: impl Into<String>) -> Self
    {   Turn
        {   text: Some(text.into())
        }
    }

    /// The utterance when it has non-whitespace content
    pub fn non_blank_text(&self) -> Option<&str>
    {   self.text
          .as_deref()
          .filter(|t| !t.trim().is_empty())
    }
}

/// Outgoing message format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat
{   Text
}

/// Body of a text envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage
{   pub text: String
}

/// One chatbot reply returned to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope
{   pub format: MessageFormat
  , pub message: TextMessage
}

impl Envelope
{   /// Wrap `text` in a text-format envelope
    pub fn text(text: impl Into<String>) -> Self
    {   Envelope
        {   format: MessageFormat::Text
          , message: TextMessage
            {   text: text.into()
            }
        }
    }

    pub fn message_text(&self) -> &str
    {   &self.message.text
    }
}

/// Error envelopes share the text envelope's shape
pub fn create_error_message(error: &crate::error::Error) -> Envelope
{   Envelope::text(error.user_message())
}

/// Block template the host lists in its flow editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTemplate
{   pub name: String
}
