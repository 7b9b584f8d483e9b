// Infrastructure layer - Configuration and repository adapters
pub mod config;
pub mod static_history;
