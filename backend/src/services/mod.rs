pub mod catalog;
pub mod metrics;
pub mod report;
pub mod topics;
pub mod youtube;
