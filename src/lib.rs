pub mod engine;
pub mod error;
pub mod normalize;
pub mod report;
pub mod scanner;

pub use engine::{Mode, RenameEngine, RunSummary};
pub use error::Error;
pub use normalize::normalize_file_name;
pub use report::{ChangeReporter, Level, SilentReporter};
