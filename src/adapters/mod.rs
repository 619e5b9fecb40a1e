// Adapters layer: outbound LLM client and roster file readers.

pub mod llm;
pub mod roster;

pub use llm::{LlmSettings, OpenRouterClient, RetryPolicy};
pub use roster::{parse_roster, parse_roster_file, RosterFormat, RosterParse, RosterReport};
