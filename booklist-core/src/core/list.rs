//! The book collection manager: single owner and writer of the book list.

use crate::{Book, BookEntry, CollectionHooks, EntryCapabilities, EntryEffect, EntryMessage, EntryRender};
use std::collections::HashMap;
use uuid::Uuid;

/// Description given to every book created by [`BookList::add_book`].
pub const NEW_BOOK_DESCRIPTION: &str = "This is a newly added book description.";

/// Cover URL given to every book created by [`BookList::add_book`].
pub const NEW_BOOK_IMAGE_URL: &str = "https://via.placeholder.com/100x150?text=New+Book";

const EMPTY_MESSAGE: &str = "No books available. Add a new book to get started.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    AddBook,
    /// A message for the entry showing the book with `id`.
    Entry { id: String, message: EntryMessage },
}

/// Everything needed to draw the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRender {
    pub header: String,
    pub add_label: &'static str,
    pub add_accessible_label: &'static str,
    /// One `(book id, entry)` pair per book, in collection order.
    pub entries: Vec<(String, EntryRender)>,
    /// Set only when the collection is empty.
    pub empty_message: Option<&'static str>,
}

/// An ordered, in-memory collection of books plus the view state of each entry.
///
/// `BookList` is the only place the sequence is mutated. Entries report edits
/// and deletions as [`EntryEffect`]s which are applied here, and every
/// effective change is announced through the registered [`CollectionHooks`].
/// Deleting or updating an id that is not present changes nothing and fires
/// no hooks.
#[derive(Debug)]
pub struct BookList {
    books: Vec<Book>,
    entries: HashMap<String, BookEntry>,
    hooks: CollectionHooks,
}

impl BookList {
    /// Seeds the collection with `books`, keeping their order.
    pub fn new(books: Vec<Book>) -> Self {
        log::debug!("seeding book list with {} books", books.len());
        Self {
            books,
            entries: HashMap::new(),
            hooks: CollectionHooks::new(),
        }
    }

    pub fn with_hooks(mut self, hooks: CollectionHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// View state for the entry showing `id`, if it has received any message.
    pub fn entry(&self, id: &str) -> Option<&BookEntry> {
        self.entries.get(id)
    }

    pub fn header(&self) -> String {
        format!("Book Collection ({})", self.books.len())
    }

    /// Appends a placeholder book and returns it.
    ///
    /// Fires "book added" with the new fields, then "books changed".
    pub fn add_book(&mut self) -> Book {
        let book = Book {
            id: self.fresh_id(),
            title: format!("New Book {}", self.books.len() + 1),
            description: Some(NEW_BOOK_DESCRIPTION.to_string()),
            image_url: Some(NEW_BOOK_IMAGE_URL.to_string()),
        };
        log::info!("adding book {} ({})", book.id, book.title);
        self.books.push(book.clone());

        self.hooks.book_added(&book.to_new_book());
        self.hooks.books_changed(&self.books);
        book
    }

    /// Removes the book with `id` and returns it.
    ///
    /// Fires "books changed", then "book deleted".
    pub fn delete_book(&mut self, id: &str) -> Option<Book> {
        let Some(index) = self.position(id) else {
            log::debug!("delete ignored, no book with id {id}");
            return None;
        };
        let removed = self.books.remove(index);
        self.entries.remove(id);
        log::info!("deleted book {id}");

        self.hooks.books_changed(&self.books);
        self.hooks.book_deleted(id);
        Some(removed)
    }

    /// Replaces the book sharing `book.id` in place and returns the previous record.
    ///
    /// Fires "books changed", then "book updated".
    pub fn update_book(&mut self, book: Book) -> Option<Book> {
        let Some(index) = self.position(&book.id) else {
            log::debug!("update ignored, no book with id {}", book.id);
            return None;
        };
        log::info!("updated book {}", book.id);
        let previous = std::mem::replace(&mut self.books[index], book);

        self.hooks.books_changed(&self.books);
        self.hooks.book_updated(&self.books[index]);
        Some(previous)
    }

    /// Processes one message to completion.
    pub fn update(&mut self, message: ListMessage) {
        match message {
            ListMessage::AddBook => {
                self.add_book();
            }
            ListMessage::Entry { id, message } => {
                let Some(book) = self.books.iter().find(|book| book.id == id) else {
                    log::debug!("dropping {message:?} for unknown book {id}");
                    return;
                };
                let entry = self.entries.entry(id).or_default();
                match entry.update(book, EntryCapabilities::ALL, message) {
                    Some(EntryEffect::Delete(id)) => {
                        self.delete_book(&id);
                    }
                    Some(EntryEffect::Update(edited)) => {
                        self.update_book(edited);
                    }
                    None => {}
                }
            }
        }
    }

    pub fn render(&self) -> ListRender {
        let fresh = BookEntry::new();
        let entries = self
            .books
            .iter()
            .map(|book| {
                let entry = self.entries.get(&book.id).unwrap_or(&fresh);
                (book.id.clone(), entry.render(book, EntryCapabilities::ALL))
            })
            .collect();

        ListRender {
            header: self.header(),
            add_label: "+ Add New Book",
            add_accessible_label: "Add new book",
            entries,
            empty_message: self.books.is_empty().then_some(EMPTY_MESSAGE),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = format!("book-{}", Uuid::new_v4());
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
