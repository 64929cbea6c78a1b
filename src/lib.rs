pub mod core;
pub mod gemini;
pub mod markup;
pub mod prompt;
pub mod tools;

// --- Primary core exports ---
pub use crate::core::error::{AnalysisError, ProviderError};
pub use crate::core::types;
pub use crate::core::types::*;
pub use crate::core::AppState;
pub use crate::tools::analyze;
