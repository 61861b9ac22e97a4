use crate::models::{Activity, TrackerState};

#[derive(Debug, Clone)]
pub enum Action {
    SaveActivity {
        activity: Activity,
        assigned_id: String,
    },
    SetActiveId {
        id: String,
    },
    DeleteActivity {
        id: String,
    },
    RestartApp,
}

pub fn reduce(state: &TrackerState, action: Action) -> TrackerState {
    match action {
        Action::SaveActivity {
            activity,
            assigned_id,
        } => {
            let mut activities = state.activities.clone();
            match activities
                .iter()
                .position(|existing| existing.id == activity.id)
            {
                Some(index) => activities[index] = activity,
                // A submitted id that matches nothing is discarded; the entry
                // is appended under the caller-assigned id.
                None => activities.push(Activity {
                    id: assigned_id,
                    ..activity
                }),
            }
            TrackerState {
                activities,
                active_id: None,
            }
        }
        Action::SetActiveId { id } => TrackerState {
            activities: state.activities.clone(),
            active_id: Some(id),
        },
        Action::DeleteActivity { id } => TrackerState {
            activities: state
                .activities
                .iter()
                .filter(|activity| activity.id != id)
                .cloned()
                .collect(),
            active_id: None,
        },
        Action::RestartApp => TrackerState::default(),
    }
}
