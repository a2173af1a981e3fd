use std::{
    io,
    num::ParseIntError,
    path::PathBuf,
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Can't specify brightness control by name and id at the same time, please use either -i or -n")]
    ConflictingSelection,

    #[error("Brightness control not specified, please use -i or -n")]
    MissingSelection,

    #[error("Illegal control id {0} (must be positive)")]
    InvalidIndex(i64),

    #[error("Invalid brightness adjustment `{spec}': {reason}")]
    InvalidAdjustment { spec: String, reason: String },

    #[error("Brightness control {0} was not found")]
    IndexNotFound(usize),

    #[error("Brightness control named `{0}' not found (try -l)")]
    NameNotFound(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: expected an integer, found `{content}'", path.display())]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{}: negative brightness {value}", path.display())]
    NegativeValue { path: PathBuf, value: i64 },

    #[error("{}: maximum brightness is zero", path.display())]
    ZeroMaximum { path: PathBuf },

    #[error("No brightness control selected for adjustment")]
    NoControlSelected,

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error: 1 for bad options, 2 when the
    /// requested control does not exist, 3 for everything the environment
    /// got wrong.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConflictingSelection
            | Error::MissingSelection
            | Error::InvalidIndex(_)
            | Error::InvalidAdjustment { .. } => 1,
            Error::IndexNotFound(_) | Error::NameNotFound(_) => 2,
            Error::Io { .. }
            | Error::Parse { .. }
            | Error::NegativeValue { .. }
            | Error::ZeroMaximum { .. }
            | Error::NoControlSelected
            | Error::Output(_) => 3,
        }
    }
}
