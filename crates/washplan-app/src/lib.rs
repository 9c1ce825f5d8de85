//! Application service layer for washplan

pub mod accounts;
pub mod config;
pub mod repository;
pub mod scheduling;

pub use accounts::AccountService;
pub use config::Config;
pub use scheduling::SchedulingService;
