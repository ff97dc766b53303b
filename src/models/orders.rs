use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order (class application) status stored as a lowercase string in the
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl Status {
    /// Legal transitions: pending → confirmed | cancelled,
    /// confirmed → completed | cancelled. Cancelled and completed are
    /// terminal. Re-asserting the current status is allowed so notes-only
    /// updates can send the status back unchanged.
    pub fn can_transition_to(self, next: Status) -> bool {
        use Status::*;
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

/// SeaORM entity for the `orders` table.
///
/// `class_id` and `schedule_id` are plain columns — applications are accepted
/// without referential checks, and `schedule_display` is a snapshot so the
/// order stays readable after the schedule is gone.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub class_id: Uuid,
    pub schedule_id: Option<Uuid>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub schedule_display: String,
    pub status: Status,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Public application form payload. Any `status` field in the submitted JSON
/// is ignored — creation always starts at `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub class_id: Uuid,
    pub schedule_id: Option<Uuid>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub schedule_display: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrder {
    pub status: Status,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<Status>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl OrderListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).min(100)
    }
}

/// Application form fields that must be filled in; returns the names of
/// whichever are missing or blank.
pub fn missing_create_fields(input: &CreateOrder) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if input.name.trim().is_empty() {
        missing.push("name");
    }
    if input.phone.trim().is_empty() {
        missing.push("phone");
    }
    if input.schedule_display.trim().is_empty() {
        missing.push("schedule_display");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_moves_forward_only() {
        assert!(Status::Pending.can_transition_to(Status::Confirmed));
        assert!(Status::Pending.can_transition_to(Status::Cancelled));
        assert!(!Status::Pending.can_transition_to(Status::Completed));
    }

    #[test]
    fn confirmed_can_complete_or_cancel() {
        assert!(Status::Confirmed.can_transition_to(Status::Completed));
        assert!(Status::Confirmed.can_transition_to(Status::Cancelled));
        assert!(!Status::Confirmed.can_transition_to(Status::Pending));
    }

    #[test]
    fn terminal_states_stay_terminal() {
        for terminal in [Status::Cancelled, Status::Completed] {
            assert!(!terminal.can_transition_to(Status::Pending));
            assert!(!terminal.can_transition_to(Status::Confirmed));
        }
        assert!(!Status::Cancelled.can_transition_to(Status::Completed));
        assert!(!Status::Completed.can_transition_to(Status::Cancelled));
    }

    #[test]
    fn same_status_is_a_no_op_transition() {
        for s in [Status::Pending, Status::Confirmed, Status::Cancelled, Status::Completed] {
            assert!(s.can_transition_to(s));
        }
    }

    #[test]
    fn unknown_status_strings_fail_to_deserialize() {
        let err = serde_json::from_str::<Status>("\"shipped\"");
        assert!(err.is_err());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let input = CreateOrder {
            class_id: Uuid::new_v4(),
            schedule_id: None,
            name: " ".to_string(),
            phone: String::new(),
            email: None,
            schedule_display: "Sep 12 (Sat) 2pm".to_string(),
        };
        assert_eq!(missing_create_fields(&input), vec!["name", "phone"]);
    }
}
