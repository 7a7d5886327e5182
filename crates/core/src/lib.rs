#![deny(unsafe_code)]
//! Core types for the sierpinski workspace.
//!
//! Provides the chaos-game generator ([`generate`], [`generate_with`]),
//! the [`Shape`] vertex sets, the [`PointSet`] output type, the seedable
//! [`Xorshift64`] PRNG behind the [`RandomSource`] seam, [`Srgb`] colors,
//! and the [`RunParams`] a render is described (and logged) by.

pub mod chaos;
pub mod color;
pub mod error;
pub mod points;
pub mod prng;
pub mod run;
pub mod shape;

pub use chaos::{generate, generate_with};
pub use color::Srgb;
pub use error::FractalError;
pub use points::PointSet;
pub use prng::{RandomSource, Xorshift64};
pub use run::{RunParams, Selection};
pub use shape::Shape;
