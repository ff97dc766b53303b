use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOTAL_SEATS: i32 = 6;

/// SeaORM entity for the `class_schedules` table.
///
/// `class_id` is a plain column, not a foreign key: classes are deletable
/// unconditionally and orders keep a denormalized display string, so nothing
/// depends on the row surviving.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub class_id: Uuid,
    pub schedule_date: Date,
    /// Human-readable date/time text shown on the application form and
    /// snapshotted into orders.
    pub schedule_display: String,
    pub total_seats: i32,
    pub available_seats: i32,
    pub is_available: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Seats taken so far, derived rather than stored.
    pub fn enrolled(&self) -> i32 {
        (self.total_seats - self.available_seats).max(0)
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchedule {
    pub schedule_date: Date,
    pub schedule_display: String,
    pub total_seats: Option<i32>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteScheduleQuery {
    pub schedule_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn schedule(total: i32, available: i32) -> Model {
        Model {
            id: Uuid::new_v4(),
            class_id: Uuid::new_v4(),
            schedule_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            schedule_display: "Sep 12 (Sat) 2pm".to_string(),
            total_seats: total,
            available_seats: available,
            is_available: true,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn enrolled_is_total_minus_available() {
        assert_eq!(schedule(6, 4).enrolled(), 2);
        assert_eq!(schedule(6, 6).enrolled(), 0);
    }

    #[test]
    fn enrolled_never_goes_negative() {
        // available can exceed total after a manual admin edit
        assert_eq!(schedule(4, 6).enrolled(), 0);
    }
}
