//! Internal domain modules for the Booklist core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod book;
pub mod catalog;
pub mod entry;
pub mod error;
pub mod form;
pub mod hooks;
pub mod list;

#[doc(inline)]
pub use book::{Book, NewBook};
#[doc(inline)]
pub use catalog::{load_catalog, parse_catalog, sample_catalog, CatalogFile};
#[doc(inline)]
pub use entry::{BookEntry, EntryCapabilities, EntryEffect, EntryMessage, EntryRender};
#[doc(inline)]
pub use error::{BooklistError, Result};
#[doc(inline)]
pub use form::{EditBookForm, FormMessage, FormOutcome};
#[doc(inline)]
pub use hooks::CollectionHooks;
#[doc(inline)]
pub use list::{BookList, ListMessage, ListRender};
