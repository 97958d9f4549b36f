use thiserror::Error;

/// Errors raised while assembling [`crate::Settings`].
///
/// A configuration error is fatal: the process stops before any turn runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    MissingApiKey(&'static str),
}
