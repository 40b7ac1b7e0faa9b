pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod plugin;

/*

book-plugin is a chatbot block plugin: it takes the user's text from the
current turn, asks a hosted text-generation model (Hugging Face Inference
API) for book recommendations or summaries, and hands the reply back to
the host as a text envelope. Every failure becomes a text envelope too.

book-plugin/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and crate overview
│   ├── error.rs        # Error type and user-facing messages
│   ├── config.rs       # Endpoint config, plugin settings and schema
│   ├── request.rs      # Turn / envelope types
│   ├── plugin.rs       # BlockPlugin contract and BookPlugin
│   └── providers/
│       ├── mod.rs
│       └── huggingface.rs
└── tests/

*/

pub use config::{InferenceConfig, PluginSettings, SettingSpec, SettingType};
pub use error::Error;
pub use plugin::{BlockPlugin, BookPlugin};
pub use request::{BlockTemplate, Envelope, MessageFormat, Turn};

/// Install `env_logger` for hosts that have no logger of their own.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger()
{   let _ = env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
