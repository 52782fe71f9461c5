//! Step models and response shapes.

use mechai_core::synthetic_id::{encode, IdKind};
use mechai_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `steps` table.
#[derive(Debug, Clone, FromRow)]
pub struct Step {
    pub step_id: DbId,
    pub title: String,
    pub body: String,
    /// Detection-model class label for the vision pipeline, if tagged.
    pub yolo_class: Option<String>,
}

/// Body of `GET /api/steps/{step_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Passed through as-is; serialised as `null` when absent.
    pub yolo_class: Option<String>,
}

impl From<Step> for StepDetailResponse {
    fn from(s: Step) -> Self {
        Self {
            id: encode(IdKind::Step, s.step_id),
            title: s.title,
            body: s.body,
            yolo_class: s.yolo_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_step_row() {
        let detail = StepDetailResponse::from(Step {
            step_id: 5,
            title: "Remove caliper".to_string(),
            body: "Undo the two guide bolts.".to_string(),
            yolo_class: Some("caliper".to_string()),
        });

        assert_eq!(detail.id, "step_5");
        assert_eq!(detail.title, "Remove caliper");
        assert_eq!(detail.body, "Undo the two guide bolts.");
        assert_eq!(detail.yolo_class.as_deref(), Some("caliper"));
    }

    #[test]
    fn missing_yolo_class_serializes_as_null() {
        let detail = StepDetailResponse::from(Step {
            step_id: 5,
            title: "Inspect rotor".to_string(),
            body: "Check for scoring.".to_string(),
            yolo_class: None,
        });

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["yolo_class"].is_null());
        assert!(json.as_object().unwrap().contains_key("yolo_class"));
    }
}
