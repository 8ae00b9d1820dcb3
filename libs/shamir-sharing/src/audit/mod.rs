//! Consistency auditing of over-complete share sets.

pub mod auditor;
pub mod config;
pub mod errors;
pub mod report;
pub mod subsets;

pub use auditor::*;
pub use config::*;
pub use errors::*;
pub use report::*;
pub use subsets::*;
