use crate::constants::conditions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single status condition as reported by the execution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
}

impl Condition {
    /// Build a `Succeeded` condition with the given status and reason
    pub fn succeeded(status: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            condition_type: conditions::SUCCEEDED.to_string(),
            status: status.into(),
            reason: Some(reason.into()),
            message: None,
            last_transition_time: Some(Utc::now()),
        }
    }

    pub fn is_true(&self) -> bool {
        self.status == conditions::STATUS_TRUE
    }

    pub fn is_false(&self) -> bool {
        self.status == conditions::STATUS_FALSE
    }

    /// An empty or unrecognized status counts as `Unknown`
    pub fn is_unknown(&self) -> bool {
        self.status == conditions::STATUS_UNKNOWN || (!self.is_true() && !self.is_false())
    }

    /// Find the condition of the given type
    pub fn find<'a>(conditions: &'a [Condition], condition_type: &str) -> Option<&'a Condition> {
        conditions
            .iter()
            .find(|c| c.condition_type == condition_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_wire_shape() {
        let json = r#"{"type":"Succeeded","status":"True","reason":"Completed"}"#;
        let condition: Condition = serde_json::from_str(json).unwrap();

        assert_eq!(condition.condition_type, "Succeeded");
        assert!(condition.is_true());
        assert_eq!(condition.reason.as_deref(), Some("Completed"));
    }

    #[test]
    fn test_unknown_status() {
        let running = Condition::succeeded("Unknown", "Running");
        assert!(running.is_unknown());
        assert!(!running.is_true());

        let all = vec![running.clone()];
        assert_eq!(Condition::find(&all, "Succeeded"), Some(&running));
        assert_eq!(Condition::find(&all, "Ready"), None);
    }

    #[test]
    fn test_unrecognized_status_is_unknown() {
        assert!(Condition::succeeded(conditions::STATUS_UNKNOWN, "Pending").is_unknown());
        assert!(Condition::succeeded("", "Pending").is_unknown());
        assert!(!Condition::succeeded(conditions::STATUS_FALSE, "Failed").is_unknown());
    }
}
