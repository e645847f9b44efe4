pub mod activity;
pub mod aggregate;
pub mod batch;
pub mod combine;
pub mod config;
pub mod merge;
