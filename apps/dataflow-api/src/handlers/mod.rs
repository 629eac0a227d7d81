//! HTTP handlers

pub mod calculate;
pub mod sale;
