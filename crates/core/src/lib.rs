#![deny(unsafe_code)]
//! Core types for the sapling procedural tree sketcher.
//!
//! Provides the shared `SaplingError`, the seeded `Xorshift64` PRNG with its
//! string-seed fold, the reproducible `Seed` spec, the `Srgb` color type, and
//! JSON parameter helpers. Domain logic (growth, curves, rasterization) lives
//! in the sibling crates.

pub mod color;
pub mod error;
pub mod params;
pub mod prng;
pub mod seed;

pub use color::Srgb;
pub use error::SaplingError;
pub use prng::Xorshift64;
pub use seed::Seed;
