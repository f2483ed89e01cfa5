pub mod config;
pub mod context;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;
pub mod web;
pub mod workflow;

pub use config::{AppConfig, DispatchMode};
pub use context::AppContext;
pub use error::{AppError, AppResult};
