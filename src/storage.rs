use crate::errors::AppError;
use crate::models::Activity;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/activities.json"),
    }
}

pub async fn load_activities(path: &Path) -> Vec<Activity> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(activities) => activities,
            Err(err) => {
                error!("failed to parse activities file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read activities file: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_activities(path: &Path, activities: &[Activity]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(activities).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EXERCISE, FOOD};

    fn scratch_path(tag: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!(
            "calorie_tracker_{tag}_{}_{:?}.json",
            std::process::id(),
            std::thread::current().id()
        ));
        path
    }

    #[tokio::test]
    async fn round_trips_a_well_formed_list() {
        let path = scratch_path("roundtrip");
        let activities = vec![
            Activity {
                id: "a".to_string(),
                category: FOOD,
                name: "Oatmeal".to_string(),
                calories: 300,
            },
            Activity {
                id: "b".to_string(),
                category: EXERCISE,
                name: "Running".to_string(),
                calories: 100,
            },
        ];

        persist_activities(&path, &activities).await.unwrap();
        let loaded = load_activities(&path).await;
        assert_eq!(loaded, activities);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn round_trips_the_empty_list() {
        let path = scratch_path("empty");

        persist_activities(&path, &[]).await.unwrap();
        let loaded = load_activities(&path).await;
        assert!(loaded.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let path = scratch_path("missing");
        let loaded = load_activities(&path).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn malformed_blob_loads_as_empty() {
        let path = scratch_path("malformed");
        fs::write(&path, b"{not json").await.unwrap();

        let loaded = load_activities(&path).await;
        assert!(loaded.is_empty());

        let _ = fs::remove_file(&path).await;
    }
}
