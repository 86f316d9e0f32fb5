pub mod driver;
pub mod stage;
pub mod outcome;
pub mod error;

// Re-exports
pub use driver::{Pipeline, SingleOwnerExport};
pub use stage::{Stage, StageTracker};
pub use outcome::RunOutcome;
pub use error::{Error, Result};
