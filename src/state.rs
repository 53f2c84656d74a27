use std::sync::Arc;

use crate::application::services::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}
