use crate::error::StorageResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository holding the persisted address book.
///
/// Provides abstraction over where the snapshot lives, enabling different
/// implementations (JSON file, in-memory mock). A snapshot always carries
/// the whole book.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Restore the stored address book. No snapshot yet means an empty book.
    async fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    async fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
