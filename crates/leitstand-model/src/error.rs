/// Errors raised while building or parsing UI model documents.
///
/// Merging and ordering never fail; every error here surfaces before a
/// value reaches the merge phase.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was absent or empty.
    #[error("{entity} requires a non-empty '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// An extension entry does not carry exactly one payload.
    #[error("invalid extension of module '{module}': {reason}")]
    InvalidExtension { module: String, reason: String },

    /// The YAML document could not be parsed.
    #[error("failed to parse {entity} document: {source}")]
    Parse {
        entity: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
