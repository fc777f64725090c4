//! SQLite backed storage for [`Book`]s.
//!
//! [`BookStore`] holds nothing but the database path. Every operation opens its own
//! connection on a blocking thread and drops it when done, so concurrent writers are
//! serialized by SQLite's own file locking.

use std::{path::PathBuf, sync::Arc};

use rusqlite::{params, Connection};
use tokio::task::JoinError;

use crate::book::{Book, NewBook};

const CREATE_BOOK_TABLE: &str = "CREATE TABLE IF NOT EXISTS book (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL
)";

const SELECT_BOOKS: &str = "SELECT id, title, author FROM book ORDER BY id";

const INSERT_BOOK: &str = "INSERT INTO book (title, author) VALUES (?1, ?2)";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Blocking task failed: {0}")]
    Join(#[from] JoinError),
}

#[derive(Debug, Clone)]
pub struct BookStore {
    path: Arc<PathBuf>,
}

impl BookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Creates the `book` table if it does not exist yet.
    ///
    /// Safe to call on every startup.
    #[tracing::instrument(name = "init_schema", skip_all, fields(path = %self.path.display()))]
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        self.with_connection(|conn| {
            echo(CREATE_BOOK_TABLE);
            conn.execute_batch(CREATE_BOOK_TABLE)?;

            Ok(())
        })
        .await?;

        tracing::info!("Schema ready");

        Ok(())
    }

    /// Returns every book ordered by ascending id.
    #[tracing::instrument(name = "list_all", skip_all)]
    pub async fn list_all(&self) -> Result<Vec<Book>, StoreError> {
        let books = self
            .with_connection(|conn| {
                echo(SELECT_BOOKS);
                let mut stmt = conn.prepare(SELECT_BOOKS)?;
                let books = stmt
                    .query_map([], |row| {
                        Ok(Book {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            author: row.get(2)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(books)
            })
            .await?;

        tracing::debug!(count = books.len(), "Listed");

        Ok(books)
    }

    /// Inserts `new_book` and returns it with its assigned id.
    #[tracing::instrument(name = "create", skip_all)]
    pub async fn create(&self, new_book: NewBook) -> Result<Book, StoreError> {
        let book = self
            .with_connection(move |conn| {
                echo(INSERT_BOOK);
                conn.execute(INSERT_BOOK, params![new_book.title, new_book.author])?;
                let id = conn.last_insert_rowid();

                Ok(new_book.into_book(id))
            })
            .await?;

        tracing::debug!(id = book.id, "Created");

        Ok(book)
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        let span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            span.in_scope(|| -> Result<T, StoreError> {
                let conn = Connection::open(path.as_path())?;
                f(&conn)
            })
        })
        .await?
    }
}

fn echo(sql: &str) {
    tracing::debug!(%sql, "Executing");
}
