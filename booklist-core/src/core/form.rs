//! Controlled edit form over a single book's editable fields.

use crate::Book;

/// Edits delivered to an [`EditBookForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    TitleChanged(String),
    DescriptionChanged(String),
    ImageUrlChanged(String),
    /// Save the edits. Ignored while the title is blank.
    Submit,
    Cancel,
}

/// What the form hands back to its owner when editing ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Saved(Book),
    Cancelled,
}

/// A labelled input as the form presents it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Stable element id, unique per book.
    pub id: String,
    pub label: &'static str,
    pub value: String,
    pub placeholder: Option<&'static str>,
    pub required: bool,
}

/// Everything needed to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRender {
    pub title: FormField,
    pub description: FormField,
    pub image_url: FormField,
    pub save_label: &'static str,
    pub save_enabled: bool,
    pub cancel_label: &'static str,
}

/// Field buffers seeded from a book, plus the book they were seeded from.
///
/// The original record is never modified; a save produces a new record that
/// differs only in the three editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBookForm {
    original: Book,
    title: String,
    description: String,
    image_url: String,
}

impl EditBookForm {
    pub fn new(book: &Book) -> Self {
        Self {
            original: book.clone(),
            title: book.title.clone(),
            description: book.description.clone().unwrap_or_default(),
            image_url: book.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn original(&self) -> &Book {
        &self.original
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Saving requires a title with at least one non-whitespace character.
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Applies one message. Returns an outcome when the form is finished.
    pub fn update(&mut self, message: FormMessage) -> Option<FormOutcome> {
        match message {
            FormMessage::TitleChanged(value) => self.title = value,
            FormMessage::DescriptionChanged(value) => self.description = value,
            FormMessage::ImageUrlChanged(value) => self.image_url = value,
            FormMessage::Submit => {
                if !self.can_save() {
                    log::debug!("ignoring submit for book {} with blank title", self.original.id);
                    return None;
                }
                return Some(FormOutcome::Saved(self.edited_book()));
            }
            FormMessage::Cancel => {
                self.reset();
                return Some(FormOutcome::Cancelled);
            }
        }
        None
    }

    pub fn render(&self) -> FormRender {
        let id = &self.original.id;
        FormRender {
            title: FormField {
                id: format!("title-{id}"),
                label: "Title *",
                value: self.title.clone(),
                placeholder: None,
                required: true,
            },
            description: FormField {
                id: format!("description-{id}"),
                label: "Description",
                value: self.description.clone(),
                placeholder: Some("Enter book description (optional)"),
                required: false,
            },
            image_url: FormField {
                id: format!("imageUrl-{id}"),
                label: "Cover Image URL",
                value: self.image_url.clone(),
                placeholder: Some("https://example.com/image.jpg (optional)"),
                required: false,
            },
            save_label: "Save Changes",
            save_enabled: self.can_save(),
            cancel_label: "Cancel",
        }
    }

    fn edited_book(&self) -> Book {
        Book {
            title: self.title.trim().to_string(),
            description: non_blank(&self.description),
            image_url: non_blank(&self.image_url),
            ..self.original.clone()
        }
    }

    fn reset(&mut self) {
        *self = Self::new(&self.original);
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new("1", "Test Book")
            .with_description("Test description")
            .with_image_url("https://example.com/image.jpg")
    }

    #[test]
    fn test_form_is_seeded_from_book() {
        let form = EditBookForm::new(&sample());
        let render = form.render();

        assert_eq!(render.title.value, "Test Book");
        assert_eq!(render.description.value, "Test description");
        assert_eq!(render.image_url.value, "https://example.com/image.jpg");
        assert_eq!(render.title.id, "title-1");
        assert!(render.title.required);
        assert!(render.save_enabled);
    }

    #[test]
    fn test_missing_optional_fields_seed_empty_buffers() {
        let form = EditBookForm::new(&Book::new("2", "Bare"));
        assert_eq!(form.description(), "");
        assert_eq!(form.image_url(), "");
    }

    #[test]
    fn test_clearing_title_disables_save() {
        let mut form = EditBookForm::new(&sample());

        form.update(FormMessage::TitleChanged(String::new()));
        assert!(!form.render().save_enabled);

        form.update(FormMessage::TitleChanged("   ".to_string()));
        assert!(!form.can_save());

        form.update(FormMessage::TitleChanged("x".to_string()));
        assert!(form.render().save_enabled);
    }

    #[test]
    fn test_submit_with_blank_title_produces_nothing() {
        let mut form = EditBookForm::new(&sample());
        form.update(FormMessage::TitleChanged(" \t".to_string()));

        assert_eq!(form.update(FormMessage::Submit), None);
    }

    #[test]
    fn test_submit_replaces_only_edited_fields() {
        let book = sample();
        let mut form = EditBookForm::new(&book);
        form.update(FormMessage::TitleChanged("Updated Title".to_string()));

        let outcome = form.update(FormMessage::Submit);
        let expected = Book {
            title: "Updated Title".to_string(),
            ..book
        };
        assert_eq!(outcome, Some(FormOutcome::Saved(expected)));
    }

    #[test]
    fn test_submit_trims_and_normalises_blank_fields() {
        let mut form = EditBookForm::new(&sample());
        form.update(FormMessage::TitleChanged("  Spaced Out  ".to_string()));
        form.update(FormMessage::DescriptionChanged("   ".to_string()));
        form.update(FormMessage::ImageUrlChanged(" cover.png ".to_string()));

        let Some(FormOutcome::Saved(saved)) = form.update(FormMessage::Submit) else {
            panic!("expected a saved book");
        };
        assert_eq!(saved.id, "1");
        assert_eq!(saved.title, "Spaced Out");
        assert_eq!(saved.description, None);
        assert_eq!(saved.image_url.as_deref(), Some("cover.png"));
    }

    #[test]
    fn test_cancel_restores_original_values() {
        let book = sample();
        let mut form = EditBookForm::new(&book);
        form.update(FormMessage::TitleChanged("Scratch".to_string()));
        form.update(FormMessage::DescriptionChanged(String::new()));

        assert_eq!(form.update(FormMessage::Cancel), Some(FormOutcome::Cancelled));
        assert_eq!(form.title(), "Test Book");
        assert_eq!(form.description(), "Test description");
        assert_eq!(form.original(), &book);
    }

    #[test]
    fn test_field_edits_do_not_finish_the_form() {
        let mut form = EditBookForm::new(&sample());
        assert_eq!(form.update(FormMessage::ImageUrlChanged(String::new())), None);
        assert_eq!(form.image_url(), "");
    }
}
