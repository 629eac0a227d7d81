//! Request and response bodies

pub mod calculate;
pub mod common;
pub mod sale;
