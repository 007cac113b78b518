use serde::{Deserialize, Serialize};

/// Public item store the FAQ page talks to unless configured otherwise.
pub const DEFAULT_STORE_URL: &str = "https://shl-server.onrender.com";

/// Category name given to items whose category is absent or blank.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Item {
    /// The category this item is grouped under.
    pub fn category_name(&self) -> &str {
        normalize_category(self.category.as_deref())
    }
}

pub fn normalize_category(category: Option<&str>) -> &str {
    match category {
        Some(name) if !name.trim().is_empty() => name,
        _ => UNCATEGORIZED,
    }
}

/// Body of `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateItemRequest {
    pub uid: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl From<CreateItemRequest> for Item {
    fn from(req: CreateItemRequest) -> Self {
        Item {
            uid: req.uid,
            question: req.question,
            answer: req.answer,
            category: Some(req.category),
        }
    }
}

/// Target of `DELETE /items`, encoded as a single query parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemSelector {
    Uid(String),
    Category(String),
}

impl ItemSelector {
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            ItemSelector::Uid(uid) => ("uid", uid),
            ItemSelector::Category(category) => ("category", category),
        }
    }

    pub fn selects(&self, item: &Item) -> bool {
        match self {
            ItemSelector::Uid(uid) => item.uid == *uid,
            ItemSelector::Category(category) => item.category_name() == category,
        }
    }
}
