use std::sync::Arc;

use crate::application::services::TutorService;

#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<TutorService>,
}
