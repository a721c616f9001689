//! # maths_core: Numeric Foundation for the Uncommons Random Toolkit
//!
//! ## Foundation Layer Role
//!
//! maths_core is the bottom layer of the workspace, providing:
//! - Byte, hex and fixed-point conversions (`binary`)
//! - Fixed-length bit vectors: `BitString` (`binary`)
//! - Descriptive statistics: `DataSet` (`statistics`)
//! - Combination and permutation enumeration (`combinatorics`)
//! - Small integer and floating-point helpers (`maths`)
//! - Exact fractions: `Rational` (`number`)
//! - Error types: `BinaryError`, `StatisticsError`, `CombinatoricsError`, `RationalError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other workspace crates and only minimal
//! external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use maths_core::binary::{bytes_to_ints, double_to_fixed_point_bits};
//! use maths_core::statistics::DataSet;
//!
//! // Big-endian word assembly
//! let words = bytes_to_ints(&[0, 0, 0, 16, 8, 4, 2, 1]).unwrap();
//! assert_eq!(words, vec![16, 134_480_385]);
//!
//! // Binary fraction expansion
//! let bits = double_to_fixed_point_bits(0.75).unwrap();
//! assert_eq!(bits.to_string(), "11");
//!
//! // Descriptive statistics
//! let data: DataSet = [2.0, 4.0, 6.0].into_iter().collect();
//! assert_eq!(data.arithmetic_mean().unwrap(), 4.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `BitString` and `DataSet`

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod binary;
pub mod combinatorics;
pub mod maths;
pub mod number;
pub mod statistics;
pub mod types;
