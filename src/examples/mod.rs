//! Sample-document runners wired to the CLI binary.

pub mod report;
pub mod run_all;
pub mod shared;

pub use report::run as run_report;
pub use run_all::run as run_all_samples;
