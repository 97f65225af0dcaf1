use thiserror::Error;

/// Errors surfaced by the fallible parts of the crate.
///
/// The engine's per-frame operations never fail; these cover rejected
/// parameter input, name lookup and landing-log persistence.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid value {value:?} for parameter `{name}`")]
    InvalidValue { name: String, value: String },

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_message_names_parameter() {
        let err = SimError::InvalidValue {
            name: "mass".into(),
            value: "heavy".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("mass"));
        assert!(msg.contains("\"heavy\""));
    }

    #[test]
    fn io_errors_convert() {
        fn fails() -> SimResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(SimError::Io(_))));
    }
}
