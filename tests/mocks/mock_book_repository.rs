use address_book::error::{StorageError, StorageResult};
use address_book::models::AddressBook;
use address_book::repositories::BookRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the snapshot in memory, can be told to fail loads or a number of
/// saves, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    snapshot: Arc<Mutex<Option<AddressBook>>>,
    fail_load: Arc<Mutex<bool>>,
    failing_saves: Arc<Mutex<usize>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new repository with no snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(book);
        repo
    }

    /// Make every load fail.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// Make the next `count` saves fail.
    pub fn fail_next_saves(&self, count: usize) {
        *self.failing_saves.lock().unwrap() = count;
    }

    /// The last saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "snapshot is corrupted",
            )));
        }

        Ok(self.saved().unwrap_or_default())
    }

    async fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        let mut failing = self.failing_saves.lock().unwrap();
        if *failing > 0 {
            *failing -= 1;
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "disk is read-only",
            )));
        }

        *self.snapshot.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
