pub mod assessment;
pub mod error;
pub mod reference;
pub mod types;

pub use assessment::{evaluate, evaluate_with_reference, AssessmentInput};
pub use error::SentinelError;
pub use reference::ReferenceData;
pub use types::*;

/// Standard result type for all sentinel-risk operations
pub type SentinelResult<T> = Result<T, SentinelError>;
