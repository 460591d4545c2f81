#![warn(missing_docs)]
//! evbus publishes structured JSON events to an AWS EventBridge event bus.

pub mod cmd;
pub mod config;
pub mod models;
pub mod publisher;
