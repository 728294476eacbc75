pub mod report;

pub use report::{ReconReport, StageSummary};
