pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod summary;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_activities, resolve_data_path};
