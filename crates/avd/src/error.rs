//! AVD management errors.
//!
//! Validation failures are surfaced verbatim to the user, so the
//! `Display` strings here are part of the command-line contract.

/// Errors raised while resolving or creating virtual devices.
#[derive(Debug, thiserror::Error)]
pub enum AvdError {
    #[error("The parameter --{0} must be defined for action 'create avd'")]
    MissingParameter(&'static str),

    #[error("Invalid --target {0}: use 'list targets' to get the target ids")]
    UnknownTarget(String),

    #[error("Invalid --abi {0}: expected format 'abi' or 'tag/abi'")]
    InvalidAbiFormat(String),

    #[error("--tag {tag} conflicts with --abi {abi}")]
    TagAbiConflict { tag: String, abi: String },

    #[error("This platform has more than one ABI. Please specify one using --abi")]
    AmbiguousAbi,

    #[error("Invalid --tag {0} for the selected target")]
    InvalidTag(String),

    #[error("Invalid --abi {0} for the selected target")]
    InvalidAbi(String),

    #[error("AVD '{0}' already exists")]
    DuplicateName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<avdkit_sdk::SdkError> for AvdError {
    fn from(err: avdkit_sdk::SdkError) -> Self {
        match err {
            avdkit_sdk::SdkError::Io(io) => AvdError::Io(io),
            other => AvdError::Parse(other.to_string()),
        }
    }
}
