//! Core library for Booklist, an in-memory book catalog.
//!
//! The primary entry point is [`BookList`], which owns the collection of
//! [`Book`] records and the per-entry view state. All collection mutations go
//! through `BookList` methods; child components ([`BookEntry`],
//! [`EditBookForm`]) only return effects for it to apply.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    book::{Book, NewBook},
    catalog::{load_catalog, parse_catalog, sample_catalog, CatalogFile, CATALOG_VERSION},
    entry::{
        ActionButton, BookEntry, Cover, DescriptionSection, EntryCapabilities, EntryDisplay,
        EntryEffect, EntryMessage, EntryRender, NO_DESCRIPTION_MESSAGE,
    },
    error::{BooklistError, Result},
    form::{EditBookForm, FormMessage, FormOutcome, FormRender, FormField},
    hooks::CollectionHooks,
    list::{BookList, ListMessage, ListRender, NEW_BOOK_DESCRIPTION, NEW_BOOK_IMAGE_URL},
};
