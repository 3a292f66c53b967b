//! Console reporting
//!
//! Every line the harness prints goes through [`Reporter`], so each strategy
//! produces byte-for-byte the same report format.

mod reporter;

pub use reporter::{format_failure_line, format_result_line, Reporter};
