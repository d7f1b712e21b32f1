use crate::editor::EditError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),

    #[error("parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// A rule tried to edit bytes another rule already claimed.
    #[error("internal rewrite error: {0}")]
    Edit(#[from] EditError),
}
