use crate::models::TrackerState;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<TrackerState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, tracker: TrackerState) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
