//! Error types for the card collection model

use crate::core::CardKey;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single card a deck wants more copies of than the collection can supply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub key: CardKey,
    /// Copies missing from the collection
    pub shortfall: u32,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (short by {})", self.key, self.shortfall)
    }
}

/// Formats a list of shortfalls as "a (short by 1), b (short by 2)"
fn join_shortfalls(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum TcgError {
    #[error("Insufficient quantity of {key}: requested {requested}, only {available} available")]
    InsufficientQuantity {
        key: CardKey,
        requested: u32,
        available: u32,
    },

    #[error("Insufficient cards in deck: requested {requested}, only {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("Deck card not in collection: {}", join_shortfalls(.0))]
    CardNotInCollection(Vec<Shortfall>),

    #[error("Invalid collection source: {0}")]
    InvalidSource(String),

    #[error("Collection not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid deck format: {0}")]
    InvalidDeckFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

impl TcgError {
    /// Copies missing for an `InsufficientQuantity` error
    pub fn quantity_shortfall(&self) -> Option<u32> {
        match self {
            TcgError::InsufficientQuantity {
                requested,
                available,
                ..
            } => Some(requested - available),
            _ => None,
        }
    }

    /// Map a failed read of `path`: a missing file is `NotFound`, anything
    /// else is `Io`
    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            TcgError::NotFound(path.to_path_buf())
        } else {
            TcgError::Io(err)
        }
    }

    /// Every violating card carried by a `CardNotInCollection` error
    pub fn shortfalls(&self) -> &[Shortfall] {
        match self {
            TcgError::CardNotInCollection(shortfalls) => shortfalls,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, TcgError>;
