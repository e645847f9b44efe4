pub mod activity;
pub mod combine;
pub mod config;
pub mod merge;
pub mod run;
pub mod show;
