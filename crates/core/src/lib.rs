//! Offline advisory core for FarmaSathi: a deterministic keyword classifier
//! that turns a farmer's free-text message into a canned, localized answer
//! with an optional weather or market data card. Pure and synchronous; the
//! agent, HTTP, and CLI layers live in sibling crates.

pub mod catalog;
pub mod gazetteer;
pub mod intent;
pub mod models;
pub mod responder;

use thiserror::Error;

pub use catalog::{ResponseCatalog, MISSING_TRANSLATION};
pub use gazetteer::Gazetteer;
pub use intent::{detect_locale, normalize_text};
pub use models::{
    AdvisoryResponse, ChatInput, ChatReply, CityRecord, ConversationSession, ConversationTurn,
    Locale, MarketReading, PriceTrend, ResponseKind, StructuredPayload, Topic, WeatherReading,
};
pub use responder::OfflineResponder;

#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("invalid detector pattern for topic {topic:?}")]
    InvalidPattern {
        topic: Topic,
        #[source]
        source: regex::Error,
    },
}
