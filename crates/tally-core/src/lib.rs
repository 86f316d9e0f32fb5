pub mod owner;
pub mod task;
pub mod correlate;
pub mod progress;
pub mod bundle;
pub mod error;

// Re-exports
pub use owner::{Owner, OwnerIndex};
pub use task::{CorrelatedTask, Task};
pub use correlate::correlate;
pub use progress::{aggregate, aggregate_all, OwnerProgress};
pub use bundle::ExportBundle;
pub use error::{Error, Result};
