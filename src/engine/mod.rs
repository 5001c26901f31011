//! Validation engine module.
//!
//! Provides rule-table evaluation and result aggregation.

pub mod result;
pub mod validator;
