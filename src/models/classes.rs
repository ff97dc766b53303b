use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `classes` table.
///
/// Curriculum, refund policy, and bank transfer details are stored as JSONB —
/// they are display content managed as a unit by the admin form, never
/// queried by field.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: String,
    pub location: String,
    pub duration: String,
    pub price: i64,
    pub price_display: Option<String>,
    pub capacity: Option<String>,
    pub curriculum: Option<Json>,
    pub policy: Option<Json>,
    pub bank_info: Option<Json>,
    /// Gate for public visibility: anonymous listings only ever see active
    /// classes.
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumStep {
    pub step: i32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub refund: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankInfo {
    pub bank: String,
    pub account: String,
    pub holder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClass {
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub description: String,
    pub image_url: String,
    pub location: String,
    pub duration: String,
    pub price: i64,
    pub price_display: Option<String>,
    pub capacity: Option<String>,
    pub curriculum: Option<Vec<CurriculumStep>>,
    pub policy: Option<Policy>,
    pub bank_info: Option<BankInfo>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClass {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub price: Option<i64>,
    pub price_display: Option<String>,
    pub capacity: Option<String>,
    pub curriculum: Option<Vec<CurriculumStep>>,
    pub policy: Option<Policy>,
    pub bank_info: Option<BankInfo>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassListQuery {
    pub is_active: Option<bool>,
}

/// A class joined with its schedules, as returned by the list and detail
/// endpoints. Schedules are ordered by date ascending.
#[derive(Debug, Clone, Serialize)]
pub struct ClassWithSchedules {
    #[serde(flatten)]
    pub class: Model,
    pub schedules: Vec<super::schedules::Model>,
}

/// Fields the admin form must fill in before a class can be saved.
/// Returns the names of whichever are missing or blank.
pub fn missing_create_fields(input: &CreateClass) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if input.title.trim().is_empty() {
        missing.push("title");
    }
    if input.description.trim().is_empty() {
        missing.push("description");
    }
    if input.image_url.trim().is_empty() {
        missing.push("image_url");
    }
    if input.location.trim().is_empty() {
        missing.push("location");
    }
    if input.duration.trim().is_empty() {
        missing.push("duration");
    }
    missing
}

/// Required fields supplied on an update must not be blanked out. Returns
/// the names of whichever are present but empty after trimming.
pub fn blank_update_fields(input: &UpdateClass) -> Vec<&'static str> {
    fn is_blank(field: &Option<String>) -> bool {
        field.as_deref().is_some_and(|v| v.trim().is_empty())
    }

    let mut blank = Vec::new();
    if is_blank(&input.title) {
        blank.push("title");
    }
    if is_blank(&input.description) {
        blank.push("description");
    }
    if is_blank(&input.image_url) {
        blank.push("image_url");
    }
    if is_blank(&input.location) {
        blank.push("location");
    }
    if is_blank(&input.duration) {
        blank.push("duration");
    }
    blank
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateClass {
        CreateClass {
            title: "Seasonal Bouquet".to_string(),
            subtitle: None,
            category: None,
            level: None,
            description: "Hand-tied bouquet basics".to_string(),
            image_url: "https://cdn.example.com/bouquet.jpg".to_string(),
            location: "Studio A".to_string(),
            duration: "2h".to_string(),
            price: 80000,
            price_display: None,
            capacity: None,
            curriculum: None,
            policy: None,
            bank_info: None,
            is_active: None,
        }
    }

    #[test]
    fn complete_input_has_no_missing_fields() {
        assert!(missing_create_fields(&valid_input()).is_empty());
    }

    #[test]
    fn blank_fields_are_reported_by_name() {
        let mut input = valid_input();
        input.title = "  ".to_string();
        input.location = String::new();
        assert_eq!(missing_create_fields(&input), vec!["title", "location"]);
    }

    fn empty_update() -> UpdateClass {
        UpdateClass {
            title: None,
            subtitle: None,
            category: None,
            level: None,
            description: None,
            image_url: None,
            location: None,
            duration: None,
            price: None,
            price_display: None,
            capacity: None,
            curriculum: None,
            policy: None,
            bank_info: None,
            is_active: None,
        }
    }

    #[test]
    fn update_cannot_blank_required_fields() {
        let mut input = empty_update();
        input.title = Some("  ".to_string());
        input.image_url = Some(String::new());
        assert_eq!(blank_update_fields(&input), vec!["title", "image_url"]);
    }

    #[test]
    fn absent_and_filled_update_fields_pass() {
        let mut input = empty_update();
        assert!(blank_update_fields(&input).is_empty());

        input.title = Some("Wreath Workshop".to_string());
        input.duration = Some("3h".to_string());
        assert!(blank_update_fields(&input).is_empty());
    }

    #[test]
    fn optional_fields_may_be_cleared_on_update() {
        // subtitle is not required; blanking it is allowed
        let mut input = empty_update();
        input.subtitle = Some(String::new());
        assert!(blank_update_fields(&input).is_empty());
    }
}
