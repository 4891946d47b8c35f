use std::sync::Arc;

use crate::services::advisor::AdvisoryService;

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<AdvisoryService>,
}
