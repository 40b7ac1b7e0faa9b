use std::fmt;

/// Shown when the plugin settings carry no API key.
pub const MISSING_API_KEY_MESSAGE: &str
  = "API key is missing. Please provide the LLM API key in the plugin settings.";

/// Shown when neither the turn nor the settings yield a query.
pub const INVALID_INPUT_MESSAGE: &str
  = "Invalid input. Please provide a book name or description.";

/// Shown for every upstream failure; the detail only goes to the log.
pub const UPSTREAM_ERROR_MESSAGE: &str
  = "An error occurred while processing your request. Please try again later.";

/// Custom error type for book plugin operations
/// Implements Clone so results can be compared and replayed in tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API key in the plugin settings
    MissingApiKey
  , /// Effective query is empty or whitespace-only
    InvalidInput
  , /// Transport-level failure talking to the inference endpoint
    HttpError(String)
  , /// Inference endpoint answered with a non-success status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Response body did not have the expected shape
    ParseError(String)
  , /// Response array was empty
    EmptyResponse
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl Error
{   /// The text handed back to the end user for this error.
    ///
    /// Upstream failures collapse to one generic string so that status
    /// codes and provider bodies never reach the conversation.
    pub fn user_message(&self) -> &'static str
    {   match self
        {   Error::MissingApiKey => MISSING_API_KEY_MESSAGE
          , Error::InvalidInput => INVALID_INPUT_MESSAGE
          , _ => UPSTREAM_ERROR_MESSAGE
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "Missing LLM API key in plugin settings")
            }
          , Error::InvalidInput => {
              write!(f, "Query text is empty")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, body } => {
              write!(f,
                "Failed to get LLM response ({}): {}",
                status, body
              )
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::EmptyResponse => {
              write!(f, "API response contained no generations")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
