// Application state for HTTP handlers
use crate::application::diagnosis_service::DiagnosisService;
use crate::application::history_cache::HistoryCache;

#[derive(Clone)]
pub struct AppState {
    pub diagnosis_service: DiagnosisService,
    pub history_cache: HistoryCache,
}
