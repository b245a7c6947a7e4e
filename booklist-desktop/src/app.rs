use crate::covers::load_cover;
use crate::settings::AppSettings;
use crate::view;
use booklist_core::{
    load_catalog, sample_catalog, Book, BookList, CollectionHooks, EntryMessage, ListMessage,
};
use iced::widget::image;
use iced::{Element, Task, Theme};
use std::collections::HashMap;

/// Where a book's cover stands. Absent from the map means not requested.
#[derive(Debug, Clone)]
enum CoverSlot {
    Loading { url: String },
    Ready { url: String, handle: image::Handle },
}

impl CoverSlot {
    fn url(&self) -> &str {
        match self {
            Self::Loading { url } | Self::Ready { url, .. } => url,
        }
    }
}

pub struct BooklistApp {
    list: BookList,
    covers: HashMap<String, CoverSlot>,
    theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    List(ListMessage),
    CoverLoaded {
        book_id: String,
        url: String,
        handle: image::Handle,
    },
    CoverFailed {
        book_id: String,
        url: String,
    },
}

impl BooklistApp {
    pub fn new(settings: AppSettings) -> (Self, Task<Message>) {
        Self::with_books(seed_books(&settings), settings.theme.to_theme())
    }

    /// Seeds the list with `books` and starts loading their covers.
    pub fn with_books(books: Vec<Book>, theme: Theme) -> (Self, Task<Message>) {
        let mut app = Self {
            list: BookList::new(books).with_hooks(logging_hooks()),
            covers: HashMap::new(),
            theme,
        };
        let task = app.request_covers();
        (app, task)
    }

    pub fn title(&self) -> String {
        format!("Booklist ({})", self.list.len())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::List(list_message) => {
                self.list.update(list_message);
                self.request_covers()
            }
            Message::CoverLoaded {
                book_id,
                url,
                handle,
            } => {
                // Drop results for a cover that was replaced or removed meanwhile.
                if let Some(slot) = self.covers.get_mut(&book_id) {
                    if slot.url() == url {
                        *slot = CoverSlot::Ready { url, handle };
                    }
                }
                Task::none()
            }
            Message::CoverFailed { book_id, url } => {
                // Only the load for the current URL may mark the cover as failed.
                if self.covers.get(&book_id).map(CoverSlot::url) != Some(url.as_str()) {
                    log::debug!("ignoring stale cover failure for book {book_id} ({url})");
                    return Task::none();
                }
                self.update(Message::List(ListMessage::Entry {
                    id: book_id,
                    message: EntryMessage::CoverFailed,
                }))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::book_list(self.list.render(), |book_id, url| match self.covers.get(book_id) {
            Some(CoverSlot::Ready { url: loaded, handle }) if loaded == url => {
                Some(handle.clone())
            }
            _ => None,
        })
        .map(Message::List)
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Starts a load for every cover that is shown but not yet requested, and
    /// forgets covers of books that are gone or whose cover failed.
    fn request_covers(&mut self) -> Task<Message> {
        let wanted: HashMap<String, String> = self
            .list
            .books()
            .iter()
            .filter(|book| !self.list.entry(&book.id).is_some_and(|entry| entry.cover_failed()))
            .filter_map(|book| {
                let url = book.image_url.as_deref().filter(|url| !url.is_empty())?;
                Some((book.id.clone(), url.to_string()))
            })
            .collect();

        self.covers
            .retain(|book_id, slot| wanted.get(book_id).is_some_and(|url| url == slot.url()));

        let mut tasks = Vec::new();
        for (book_id, url) in wanted {
            if self.covers.contains_key(&book_id) {
                continue;
            }
            log::debug!("loading cover for book {book_id} from {url}");
            self.covers
                .insert(book_id.clone(), CoverSlot::Loading { url: url.clone() });
            tasks.push(cover_task(book_id, url));
        }
        Task::batch(tasks)
    }
}

fn cover_task(book_id: String, url: String) -> Task<Message> {
    Task::perform(load_cover(url.clone()), move |result| match result {
        Ok(handle) => Message::CoverLoaded {
            book_id: book_id.clone(),
            url: url.clone(),
            handle,
        },
        Err(e) => {
            log::warn!("cover for book {book_id} unavailable: {e}");
            Message::CoverFailed {
                book_id: book_id.clone(),
                url: url.clone(),
            }
        }
    })
}

fn seed_books(settings: &AppSettings) -> Vec<Book> {
    let Some(path) = &settings.catalog_path else {
        log::info!("no catalog configured, showing the sample catalog");
        return sample_catalog();
    };
    load_catalog(path).unwrap_or_else(|e| {
        log::error!(
            "failed to load catalog {}: {}; showing the sample catalog",
            path.display(),
            e.user_message()
        );
        sample_catalog()
    })
}

/// Reports every collection change to the log.
fn logging_hooks() -> CollectionHooks {
    CollectionHooks::new()
        .on_book_added(|book| log::info!("New book added: {book:?}"))
        .on_books_change(|books| log::info!("Books updated: {} in collection", books.len()))
        .on_book_deleted(|id| log::info!("Book deleted: {id}"))
        .on_book_updated(|book| log::info!("Book updated: {book:?}"))
}
