//! Domain services

pub mod filter;
pub mod workflow;
