use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    State,
    Lookup,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Invalid arguments at construction or configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least {min} dice are required, got {got}")]
    TooFewDice { min: usize, got: usize },
    #[error("die {die} has a different face set than die 0")]
    FaceMismatch { die: usize },
    #[error("number of rolls must be at least {min}, got {got}")]
    TooFewRolls { min: usize, got: usize },
    #[error("invalid results form {0:?}, expected \"wide\" or \"narrow\"")]
    InvalidForm(String),
    #[error("game has not been played, nothing to analyze")]
    Unplayed,
    #[error("die must have at least one face")]
    NoFaces,
    #[error("duplicate face {0}")]
    DuplicateFace(String),
    #[error("expected {expected} weights, got {got}")]
    WeightCount { expected: usize, got: usize },
    #[error("at least one face must have a non-zero weight")]
    ZeroWeights,
    #[error("overflow in total weight")]
    WeightOverflow,
    #[error("die column {die} has {got} outcomes, expected {expected}")]
    RaggedColumn {
        die: usize,
        expected: usize,
        got: usize,
    },
    #[error("roll {roll} has no outcomes")]
    EmptyRow { roll: usize },
    #[error("roll {roll} has {got} outcomes, expected {expected}")]
    RaggedRow {
        roll: usize,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no results available, play the game first")]
    NotPlayed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("face {face} is not a valid face")]
pub struct LookupError {
    pub face: String,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::State(_) => ErrorKind::State,
            Error::Lookup(_) => ErrorKind::Lookup,
        }
    }
}

impl LookupError {
    pub(crate) fn new<T: std::fmt::Debug>(face: &T) -> Self {
        Self {
            face: format!("{face:?}"),
        }
    }
}
