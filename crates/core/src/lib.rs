//! Equipment reliability analytics engine.
//!
//! Every computation here is a pure, synchronous function over an in-memory
//! snapshot of intervention records. The single entry point is
//! [`report::compute_reliability_report`]; the other modules are the stages
//! it composes and are public so presentation layers can reuse them.

pub mod config;
pub mod cost;
pub mod error;
pub mod intervals;
pub mod intervention;
pub mod mtbf;
pub mod mttr;
pub mod prediction;
pub mod ranking;
pub mod record_filter;
pub mod report;
pub mod source;
pub mod timeline;
pub mod types;
