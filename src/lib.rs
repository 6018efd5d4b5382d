// Receipt Points - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod receipt;
pub mod schema;   // Structural validation gate
pub mod fields;   // Typed parsing of amounts, dates, times
pub mod rules;    // Seven scoring rules
pub mod store;    // In-memory score registry
pub mod service;
pub mod error;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use receipt::{Item, Receipt};
pub use schema::{ReceiptValidator, ValidReceipt, ValidationError, ValidationResult};
pub use fields::{parse_amount, parse_purchase_date, parse_purchase_time, FieldKind, ParseFailure};
pub use rules::{PointsRule, RuleContribution, ScoreBreakdown, ScoringEngine};
pub use store::{InvalidReceiptId, ReceiptId, ScoreRecord, ScoreStore};
pub use service::ReceiptService;
pub use error::{ServiceError, ServiceResult};
pub use config::{ConfigError, ServerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
