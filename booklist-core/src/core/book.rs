//! The book record shared by every component.

use serde::{Deserialize, Serialize};

/// A single book in the collection.
///
/// `description` and `image_url` use `None` for "not provided"; a saved
/// record never carries `Some("")` for either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A book's created fields without its id, as reported when a book is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Book {
    /// Creates a book with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns the record's fields minus its id.
    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl NewBook {
    /// Assigns `id` to these fields, producing a full record.
    pub fn with_id(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
        }
    }
}
