use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// 目錄中的一筆寵物資料。除了 `id` 以外的欄位都可能缺少或是 `null`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo_urls: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Pet {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            category: None,
            name: None,
            photo_urls: None,
            tags: None,
            status: None,
        }
    }

    pub fn with_category(mut self, id: i64, name: &str) -> Self {
        self.category = Some(Category {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[(i64, &str)]) -> Self {
        self.tags = Some(
            tags.iter()
                .map(|(id, name)| Tag {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Category name, or `""` when the pet has no category.
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn tag_names(&self) -> Option<Vec<&str>> {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().map(|t| t.name.as_str()).collect())
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match &self.category {
            Some(category) => category.name.as_str(),
            None => "No Category",
        };
        let tags = match self.tag_names() {
            Some(names) => names.join(", "),
            None => "No Tags".to_string(),
        };

        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Status: {}, Tags: {}",
            self.id,
            self.display_name(),
            category,
            self.status.as_deref().unwrap_or(""),
            tags
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
