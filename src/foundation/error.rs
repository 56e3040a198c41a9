use crate::foundation::core::ScopeId;

pub type MotionResult<T> = Result<T, MotionError>;

#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("configuration error: unknown easing '{0}'")]
    UnknownEasing(String),

    #[error("environment error: blur filter '{id}' not found in scope '{scope}'")]
    FilterMissing { scope: ScopeId, id: String },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasing(name.into())
    }

    pub fn filter_missing(scope: &ScopeId, id: impl Into<String>) -> Self {
        Self::FilterMissing {
            scope: scope.clone(),
            id: id.into(),
        }
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Environment errors abort an animation mid-flight and are never retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FilterMissing { .. })
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
