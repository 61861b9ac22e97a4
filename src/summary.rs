use crate::models::{Activity, EXERCISE, FOOD, Summary};

pub fn build_summary(activities: &[Activity]) -> Summary {
    let mut consumed = 0u64;
    let mut burned = 0u64;

    for activity in activities {
        match activity.category {
            FOOD => consumed += u64::from(activity.calories),
            EXERCISE => burned += u64::from(activity.calories),
            _ => {}
        }
    }

    Summary {
        consumed,
        burned,
        net: consumed as i64 - burned as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, category: u32, calories: u32) -> Activity {
        Activity {
            id: id.to_string(),
            category,
            name: format!("activity {id}"),
            calories,
        }
    }

    #[test]
    fn summary_splits_by_category() {
        let activities = vec![activity("a", FOOD, 300), activity("b", EXERCISE, 100)];

        let summary = build_summary(&activities);
        assert_eq!(summary.consumed, 300);
        assert_eq!(summary.burned, 100);
        assert_eq!(summary.net, 200);
    }

    #[test]
    fn net_goes_negative_when_exercise_dominates() {
        let activities = vec![activity("a", FOOD, 150), activity("b", EXERCISE, 500)];

        let summary = build_summary(&activities);
        assert_eq!(summary.net, -350);
    }

    #[test]
    fn unknown_categories_count_toward_neither_total() {
        let activities = vec![
            activity("a", FOOD, 200),
            activity("b", 9, 999),
            activity("c", EXERCISE, 50),
        ];

        let summary = build_summary(&activities);
        assert_eq!(summary.consumed, 200);
        assert_eq!(summary.burned, 50);
        assert_eq!(summary.net, 150);
    }

    #[test]
    fn empty_list_yields_zeroes() {
        let summary = build_summary(&[]);
        assert_eq!(summary.consumed, 0);
        assert_eq!(summary.burned, 0);
        assert_eq!(summary.net, 0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let activities = vec![activity("a", FOOD, 420), activity("b", EXERCISE, 180)];

        let first = build_summary(&activities);
        let second = build_summary(&activities);
        assert_eq!(first.consumed, second.consumed);
        assert_eq!(first.burned, second.burned);
        assert_eq!(first.net, second.net);
    }
}
