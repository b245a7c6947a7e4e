//! Initial book data: catalog files and the bundled sample catalog.
//!
//! A catalog file is a JSON envelope:
//!
//! ```json
//! { "version": 1, "books": [ { "id": "1", "title": "1984" } ] }
//! ```

use crate::{Book, BooklistError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The only catalog format version this build understands.
pub const CATALOG_VERSION: u32 = 1;

/// Top-level JSON structure of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub version: u32,
    pub books: Vec<Book>,
}

/// Reads and validates the catalog at `path`.
///
/// # Errors
///
/// Returns [`BooklistError::Io`] if the file cannot be read, plus any error
/// from [`parse_catalog`].
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let books = parse_catalog(&content)?;
    log::info!("loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

/// Parses catalog JSON, rejecting data a collection cannot hold.
///
/// Blank descriptions and image URLs are normalised to `None`.
///
/// # Errors
///
/// Returns [`BooklistError::Json`] for malformed JSON,
/// [`BooklistError::InvalidCatalog`] for an unsupported version or a repeated
/// id, and [`BooklistError::ValidationFailed`] for a book with a blank title.
pub fn parse_catalog(json: &str) -> Result<Vec<Book>> {
    let catalog: CatalogFile = serde_json::from_str(json)?;
    if catalog.version != CATALOG_VERSION {
        return Err(BooklistError::InvalidCatalog(format!(
            "unsupported version {}",
            catalog.version
        )));
    }

    let mut seen = HashSet::new();
    catalog
        .books
        .into_iter()
        .map(|mut book| {
            if !seen.insert(book.id.clone()) {
                return Err(BooklistError::InvalidCatalog(format!("duplicate id: {}", book.id)));
            }
            if book.title.trim().is_empty() {
                return Err(BooklistError::ValidationFailed(format!(
                    "Book {} has an empty title",
                    book.id
                )));
            }
            book.description = book.description.filter(|d| !d.trim().is_empty());
            book.image_url = book.image_url.filter(|u| !u.trim().is_empty());
            Ok(book)
        })
        .collect()
}

/// The demo collection shown when no catalog is configured.
///
/// It deliberately includes a book without a cover, one without a
/// description and one whose cover cannot load.
pub fn sample_catalog() -> Vec<Book> {
    vec![
        Book::new("1", "The Great Gatsby")
            .with_description(
                "A classic novel of the Jazz Age, exploring themes of idealism, resistance to change, social upheaval, and excess.",
            )
            .with_image_url("https://via.placeholder.com/100x150/4A90E2/FFFFFF?text=Gatsby"),
        Book::new("2", "To Kill a Mockingbird")
            .with_description(
                "A gripping story of racial injustice and childhood innocence in the American South.",
            )
            .with_image_url("https://via.placeholder.com/100x150/50E3C2/FFFFFF?text=Mockingbird"),
        Book::new("3", "1984").with_description(
            "A dystopian social science fiction novel that examines totalitarianism and thought control.",
        ),
        Book::new("4", "Pride and Prejudice")
            .with_image_url("https://via.placeholder.com/100x150/B8E986/FFFFFF?text=Pride"),
        Book::new("5", "The Hobbit")
            .with_description("A fantasy novel about the adventures of hobbit Bilbo Baggins.")
            .with_image_url("https://invalid-url-that-will-fail.com/image.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_catalog() {
        let books = parse_catalog(
            r#"{"version":1,"books":[
                {"id":"1","title":"Dune","imageUrl":"dune.jpg"},
                {"id":"2","title":"Emma","description":"Matchmaking"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].image_url.as_deref(), Some("dune.jpg"));
        assert_eq!(books[1].description.as_deref(), Some("Matchmaking"));
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let books =
            parse_catalog(r#"{"version":1,"books":[{"id":"1","title":"Dune","description":"  ","imageUrl":""}]}"#)
                .unwrap();

        assert!(books[0].description.is_none());
        assert!(books[0].image_url.is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = parse_catalog(
            r#"{"version":1,"books":[{"id":"1","title":"A"},{"id":"1","title":"B"}]}"#,
        );
        assert!(matches!(result, Err(BooklistError::InvalidCatalog(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let result = parse_catalog(r#"{"version":1,"books":[{"id":"7","title":"   "}]}"#);
        assert!(matches!(result, Err(BooklistError::ValidationFailed(_))));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let result = parse_catalog(r#"{"version":2,"books":[]}"#);
        assert!(matches!(result, Err(BooklistError::InvalidCatalog(_))));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        assert!(matches!(parse_catalog("[1, 2"), Err(BooklistError::Json(_))));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"version":1,"books":[{{"id":"a","title":"Persuasion"}}]}}"#).unwrap();

        let books = load_catalog(file.path()).unwrap();
        assert_eq!(books, vec![Book::new("a", "Persuasion")]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(dir.path().join("absent.json"));
        assert!(matches!(result, Err(BooklistError::Io(_))));
    }

    #[test]
    fn test_sample_catalog_covers_missing_fields() {
        let books = sample_catalog();
        let ids: HashSet<_> = books.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids.len(), books.len());
        assert!(books.iter().any(|b| b.image_url.is_none()));
        assert!(books.iter().any(|b| b.description.is_none()));
    }

    #[test]
    fn test_sample_catalog_round_trips_through_parser() {
        let file = CatalogFile {
            version: CATALOG_VERSION,
            books: sample_catalog(),
        };
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(parse_catalog(&json).unwrap(), sample_catalog());
    }
}
