//! Per-record display and edit unit.
//!
//! A [`BookEntry`] holds only presentation state. The record itself is
//! passed in on every call by the owning [`BookList`](super::list::BookList),
//! and changes leave the entry as an [`EntryEffect`] for the owner to apply.

use crate::{Book, EditBookForm, FormMessage, FormOutcome, FormRender};

/// Shown in place of the toggle when a book has no description.
pub const NO_DESCRIPTION_MESSAGE: &str = "No description available";

const SHOW_DESCRIPTION: &str = "Show Description";
const HIDE_DESCRIPTION: &str = "Hide Description";

/// Which actions the parent allows this entry to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryCapabilities {
    pub update: bool,
    pub delete: bool,
}

impl EntryCapabilities {
    /// Both edit and delete are offered.
    pub const ALL: Self = Self {
        update: true,
        delete: true,
    };
    /// Neither action is offered.
    pub const READ_ONLY: Self = Self {
        update: false,
        delete: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMessage {
    ToggleDescription,
    Edit,
    Delete,
    /// The cover image could not be loaded.
    CoverFailed,
    Form(FormMessage),
}

/// A change the entry asks its owner to make to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEffect {
    Update(Book),
    Delete(String),
}

/// How the cover slot is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    Image { url: String, alt: String },
    /// Accessible placeholder naming the book.
    Placeholder { label: String },
}

/// An icon button with its accessible label and hover text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub tooltip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionSection {
    /// `text` is `Some` only while the description is expanded.
    Toggle {
        label: &'static str,
        expanded: bool,
        text: Option<String>,
    },
    Missing { message: &'static str },
}

/// The read-only view of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDisplay {
    pub heading_id: String,
    pub cover: Cover,
    pub title: String,
    pub edit: Option<ActionButton>,
    pub delete: Option<ActionButton>,
    pub description: DescriptionSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRender {
    Display(EntryDisplay),
    Editing(FormRender),
}

/// Presentation state for one book.
///
/// All flags start off. A recorded cover failure is never cleared, so a
/// broken cover is not retried for as long as the entry lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookEntry {
    description_visible: bool,
    editing: Option<EditBookForm>,
    cover_failed: bool,
}

impl BookEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_description_visible(&self) -> bool {
        self.description_visible
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn cover_failed(&self) -> bool {
        self.cover_failed
    }

    /// The in-progress form while editing.
    pub fn form(&self) -> Option<&EditBookForm> {
        self.editing.as_ref()
    }

    /// Applies one message against the current `book`.
    ///
    /// Actions the parent did not grant in `capabilities` are ignored, as are
    /// form messages while not editing.
    pub fn update(
        &mut self,
        book: &Book,
        capabilities: EntryCapabilities,
        message: EntryMessage,
    ) -> Option<EntryEffect> {
        match message {
            EntryMessage::ToggleDescription => {
                self.description_visible = !self.description_visible;
                None
            }
            EntryMessage::CoverFailed => {
                if !self.cover_failed {
                    log::debug!("cover for book {} failed to load", book.id);
                }
                self.cover_failed = true;
                None
            }
            EntryMessage::Edit => {
                if capabilities.update && self.editing.is_none() {
                    self.editing = Some(EditBookForm::new(book));
                }
                None
            }
            EntryMessage::Delete => capabilities
                .delete
                .then(|| EntryEffect::Delete(book.id.clone())),
            EntryMessage::Form(form_message) => {
                let outcome = self.editing.as_mut()?.update(form_message)?;
                self.editing = None;
                match outcome {
                    FormOutcome::Saved(edited) if capabilities.update => {
                        Some(EntryEffect::Update(edited))
                    }
                    FormOutcome::Saved(_) | FormOutcome::Cancelled => None,
                }
            }
        }
    }

    pub fn render(&self, book: &Book, capabilities: EntryCapabilities) -> EntryRender {
        if let Some(form) = &self.editing {
            return EntryRender::Editing(form.render());
        }

        let cover = match book.image_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) if !self.cover_failed => Cover::Image {
                url: url.to_string(),
                alt: format!("Cover of {}", book.title),
            },
            _ => Cover::Placeholder {
                label: format!("No cover available for {}", book.title),
            },
        };

        let description = match book.description.as_deref().filter(|d| !d.is_empty()) {
            Some(text) => DescriptionSection::Toggle {
                label: if self.description_visible {
                    HIDE_DESCRIPTION
                } else {
                    SHOW_DESCRIPTION
                },
                expanded: self.description_visible,
                text: self.description_visible.then(|| text.to_string()),
            },
            None => DescriptionSection::Missing {
                message: NO_DESCRIPTION_MESSAGE,
            },
        };

        EntryRender::Display(EntryDisplay {
            heading_id: format!("book-title-{}", book.id),
            cover,
            title: book.title.clone(),
            edit: capabilities.update.then(|| ActionButton {
                label: format!("Edit {}", book.title),
                tooltip: "Edit book",
            }),
            delete: capabilities.delete.then(|| ActionButton {
                label: format!("Delete {}", book.title),
                tooltip: "Delete book",
            }),
            description,
        })
    }
}
