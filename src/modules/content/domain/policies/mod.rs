pub mod content_policy;

pub use content_policy::{ContentPolicy, ContentValidationError, DefaultContentPolicy};
