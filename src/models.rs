use serde::{Deserialize, Serialize};

pub const FOOD: u32 = 1;
pub const EXERCISE: u32 = 2;

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

pub const CATEGORIES: [Category; 2] = [
    Category { id: FOOD, name: "Food" },
    Category { id: EXERCISE, name: "Exercise" },
];

pub fn category_name(id: u32) -> &'static str {
    CATEGORIES
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name)
        .unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub category: u32,
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    pub activities: Vec<Activity>,
    pub active_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveActivityRequest {
    #[serde(default)]
    pub id: String,
    pub category: u32,
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub consumed: u64,
    pub burned: u64,
    pub net: i64,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub activities: Vec<Activity>,
    pub active_id: Option<String>,
    pub summary: Summary,
}
