//! Assessment handlers.

mod preview_score;

pub use preview_score::{PreviewScoreHandler, PreviewScoreQuery, PreviewScoreResult};
