//! Data models for extracted forms, configuration and service payloads.

pub mod config;
pub mod form;
pub mod request;
