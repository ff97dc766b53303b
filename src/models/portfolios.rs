use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolios` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    /// Representative image; always the first entry of `image_urls` when both
    /// are set.
    pub image_url: String,
    pub image_urls: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

/// Portfolio category stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[sea_orm(string_value = "wedding")]
    Wedding,
    #[sea_orm(string_value = "bouquet")]
    Bouquet,
    #[sea_orm(string_value = "wreath")]
    Wreath,
    #[sea_orm(string_value = "class")]
    Class,
    #[sea_orm(string_value = "others")]
    Others,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolio {
    pub title: String,
    pub category: Category,
    pub image_url: String,
    pub image_urls: Option<Vec<String>>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePortfolio {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

/// Required fields supplied on an update must not be blanked out. Returns
/// the names of whichever are present but empty after trimming. Category is
/// an enum and cannot be blank by construction.
pub fn blank_update_fields(input: &UpdatePortfolio) -> Vec<&'static str> {
    let mut blank = Vec::new();
    if input.title.as_deref().is_some_and(|v| v.trim().is_empty()) {
        blank.push("title");
    }
    if input
        .image_url
        .as_deref()
        .is_some_and(|v| v.trim().is_empty())
    {
        blank.push("image_url");
    }
    blank
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioListQuery {
    pub category: Option<Category>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PortfolioListQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).min(100)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

/// Make `image_url` the first entry of `image_urls`. The admin uploads a
/// batch of images and the first one is the representative; if the chosen
/// representative is missing from the list it is prepended.
pub fn normalize_images(image_url: String, image_urls: Option<Vec<String>>) -> (String, Option<Vec<String>>) {
    match image_urls {
        Some(urls) if !urls.is_empty() => {
            if urls[0] == image_url {
                (image_url, Some(urls))
            } else {
                let mut all = Vec::with_capacity(urls.len() + 1);
                all.push(image_url.clone());
                all.extend(urls.into_iter().filter(|u| *u != image_url));
                (image_url, Some(all))
            }
        }
        other => (image_url, other.filter(|u| !u.is_empty())),
    }
}

#[cfg(test)]
mod tests {
    use super::{UpdatePortfolio, blank_update_fields, normalize_images};

    #[test]
    fn representative_stays_first() {
        let (url, urls) = normalize_images(
            "a.jpg".to_string(),
            Some(vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()]),
        );
        assert_eq!(url, "a.jpg");
        assert_eq!(urls.unwrap(), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn representative_moves_to_front() {
        let (url, urls) = normalize_images(
            "b.jpg".to_string(),
            Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
        );
        assert_eq!(url, "b.jpg");
        assert_eq!(urls.unwrap(), vec!["b.jpg", "a.jpg"]);
    }

    #[test]
    fn empty_list_becomes_none() {
        let (url, urls) = normalize_images("a.jpg".to_string(), Some(vec![]));
        assert_eq!(url, "a.jpg");
        assert!(urls.is_none());
    }

    #[test]
    fn no_list_is_passed_through() {
        let (url, urls) = normalize_images("a.jpg".to_string(), None);
        assert_eq!(url, "a.jpg");
        assert!(urls.is_none());
    }

    #[test]
    fn update_cannot_blank_required_fields() {
        let input = UpdatePortfolio {
            title: Some(" ".to_string()),
            category: None,
            image_url: Some(String::new()),
            image_urls: None,
            description: None,
            display_order: None,
        };
        assert_eq!(blank_update_fields(&input), vec!["title", "image_url"]);
    }

    #[test]
    fn absent_and_filled_update_fields_pass() {
        let input = UpdatePortfolio {
            title: Some("Spring Wreath".to_string()),
            category: None,
            image_url: None,
            image_urls: None,
            description: Some(String::new()), // optional, may be cleared
            display_order: None,
        };
        assert!(blank_update_fields(&input).is_empty());
    }
}
