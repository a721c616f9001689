//! Descriptive statistics over recorded samples.
//!
//! [`DataSet`] is the sink used by the command-line sampler to summarise
//! generator and distribution output.

mod data_set;

pub use data_set::DataSet;
