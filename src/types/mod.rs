pub mod config;
pub mod report;
pub mod scoring;
pub mod survey;
