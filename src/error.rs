use thiserror::Error;

use crate::parse::ParseError;
use crate::{ConfigError, StepError};

/// Unified error type covering condition parsing, configuration loading, and
/// stepping.
#[derive(Debug, Error)]
pub enum TickError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Step(#[from] StepError),
}
