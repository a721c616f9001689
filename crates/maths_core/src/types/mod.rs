//! Core types shared across the workspace.
//!
//! Currently this is limited to the structured error enums; every other
//! module reports failures through one of them.

pub mod error;

pub use error::{BinaryError, CombinatoricsError, RationalError, StatisticsError};
