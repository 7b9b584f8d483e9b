// Application layer - Diagnostic pipeline and use cases
pub mod advisory_service;
pub mod classifier;
pub mod cost_estimator;
pub mod detector;
pub mod diagnosis_service;
pub mod history_cache;
pub mod history_repository;
pub mod narrator;
pub mod prognosis;
pub mod registry;
pub mod urgency;
