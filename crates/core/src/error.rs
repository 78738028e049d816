//! Error types shared across the sapling crates.

use thiserror::Error;

/// Errors produced while growing, fitting, or rasterizing a tree.
#[derive(Debug, Error)]
pub enum SaplingError {
    /// Width, height, or pixel step was zero (or their product overflowed)
    /// when creating a raster grid or validating a seed spec.
    #[error("invalid dimensions: width, height, and pixel step must be non-zero")]
    InvalidDimensions,

    /// A curve algorithm name was not one of the recognized set.
    #[error("unknown curve algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A node flagged as part of a main chain had no parent during the
    /// segment walk. Unreachable under correct growth; aborts only the
    /// segment being extracted.
    #[error("main-chain node {0} has no parent")]
    OrphanMainChild(usize),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
