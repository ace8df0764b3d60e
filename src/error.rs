use std::fmt;

/// Errors that can occur while running a program.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// `<` was executed while the data pointer was already at cell 0.
    #[error("Pointer out of bounds at instruction {ip} (ptr={ptr}, op='<')")]
    OutOfBounds { ip: usize, ptr: usize },

    /// A loop bracket had no partner.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: BracketKind },

    /// Reading from the input stream or writing to the output stream failed.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Byte offset into the program text where the error was raised.
    pub fn ip(&self) -> usize {
        match self {
            RunError::OutOfBounds { ip, .. }
            | RunError::UnmatchedBracket { ip, .. }
            | RunError::Io { ip, .. } => *ip,
        }
    }
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

/// Rejected tape movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TapeError {
    /// A left move of `requested` cells from `position` would cross below cell 0.
    /// `position` single steps would have succeeded before the failing one.
    #[error("cannot move {requested} cell(s) left from position {position}")]
    OutOfBounds { position: usize, requested: usize },
}

/// Invalid setting value from a flag, environment variable or config file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown strategy '{0}' (expected 'naive' or 'rle')")]
    InvalidStrategy(String),

    #[error("unknown EOF policy '{0}' (expected 'sentinel', 'zero' or 'unchanged')")]
    InvalidEofPolicy(String),
}
