//! Outbound notifications fired by [`BookList`](super::list::BookList).
//!
//! Every hook is optional; an unset hook is simply skipped. Hooks are
//! one-way: their return values are never consumed.

use crate::{Book, NewBook};
use std::fmt;

/// The set of callbacks a host registers to observe collection changes.
///
/// ```rust
/// use booklist_core::CollectionHooks;
///
/// let hooks = CollectionHooks::new()
///     .on_book_deleted(|id| println!("deleted {id}"));
/// assert!(format!("{hooks:?}").contains("book_deleted: true"));
/// ```
#[derive(Default)]
pub struct CollectionHooks {
    book_added: Option<Box<dyn FnMut(&NewBook) + Send>>,
    books_changed: Option<Box<dyn FnMut(&[Book]) + Send>>,
    book_deleted: Option<Box<dyn FnMut(&str) + Send>>,
    book_updated: Option<Box<dyn FnMut(&Book) + Send>>,
}

impl CollectionHooks {
    /// Creates an empty hook set; no notifications are delivered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the created fields (no id) after a book is appended.
    pub fn on_book_added(mut self, hook: impl FnMut(&NewBook) + Send + 'static) -> Self {
        self.book_added = Some(Box::new(hook));
        self
    }

    /// Called with the full sequence after every effective mutation.
    pub fn on_books_change(mut self, hook: impl FnMut(&[Book]) + Send + 'static) -> Self {
        self.books_changed = Some(Box::new(hook));
        self
    }

    /// Called with the id of a removed book.
    pub fn on_book_deleted(mut self, hook: impl FnMut(&str) + Send + 'static) -> Self {
        self.book_deleted = Some(Box::new(hook));
        self
    }

    /// Called with the replacement record after an in-place update.
    pub fn on_book_updated(mut self, hook: impl FnMut(&Book) + Send + 'static) -> Self {
        self.book_updated = Some(Box::new(hook));
        self
    }

    pub(crate) fn book_added(&mut self, book: &NewBook) {
        if let Some(hook) = self.book_added.as_mut() {
            hook(book);
        }
    }

    pub(crate) fn books_changed(&mut self, books: &[Book]) {
        if let Some(hook) = self.books_changed.as_mut() {
            hook(books);
        }
    }

    pub(crate) fn book_deleted(&mut self, id: &str) {
        if let Some(hook) = self.book_deleted.as_mut() {
            hook(id);
        }
    }

    pub(crate) fn book_updated(&mut self, book: &Book) {
        if let Some(hook) = self.book_updated.as_mut() {
            hook(book);
        }
    }
}

impl fmt::Debug for CollectionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionHooks")
            .field("book_added", &self.book_added.is_some())
            .field("books_changed", &self.books_changed.is_some())
            .field("book_deleted", &self.book_deleted.is_some())
            .field("book_updated", &self.book_updated.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_unset_hooks_are_skipped() {
        let mut hooks = CollectionHooks::new();
        hooks.book_deleted("1");
        hooks.books_changed(&[]);
        assert!(format!("{hooks:?}").contains("book_deleted: false"));
    }

    #[test]
    fn test_registered_hook_receives_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut hooks =
            CollectionHooks::new().on_book_deleted(move |id| sink.lock().unwrap().push(id.to_string()));

        hooks.book_deleted("42");
        assert_eq!(*seen.lock().unwrap(), vec!["42".to_string()]);
    }

    #[test]
    fn test_debug_reports_which_hooks_are_set() {
        let hooks = CollectionHooks::new().on_book_updated(|_| {});
        let debug = format!("{hooks:?}");
        assert!(debug.contains("book_updated: true"));
        assert!(debug.contains("book_added: false"));
    }
}
