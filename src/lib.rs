//! Deployment configuration for the Exosphere dashboard front-end.

pub mod config;
pub mod render;

pub use config::{ConfigError, DeploymentConfig};
