pub mod attributes;
pub mod config;
pub mod report;
pub mod scoring;
