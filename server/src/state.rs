use std::sync::Arc;

use directory::JobDirectory;

pub struct AppState {
    pub directory: Arc<JobDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<JobDirectory>) -> Self {
        AppState { directory }
    }
}
