use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A value could not be converted to or from its stored document form.
    #[error("codec error: {0}")]
    Codec(String),
}
