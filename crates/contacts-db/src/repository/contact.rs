//! # Contact Repository
//!
//! Raw CRUD statements against the `contacts` table.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Everything is keyed on entryId. No other validation happens here.     │
//! │                                                                         │
//! │  insert  ── INSERT OR REPLACE ──► new id: row added                    │
//! │                                   known id: row replaced               │
//! │                                                                         │
//! │  update  ── UPDATE ... WHERE entryId = ? ──► 0 rows? no-op             │
//! │  delete  ── DELETE ... WHERE entryId = ? ──► 0 rows? no-op             │
//! │  get     ── SELECT ... WHERE entryId = ? ──► 0 rows? None              │
//! │                                                                         │
//! │  An empty or unknown id is "not found", never an error.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listing orders by rowid, i.e. insertion order as persisted. A replaced
//! row gets a new rowid and therefore moves to the end.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use contacts_core::Contact;

/// Repository for contact database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ContactRepository::new(pool);
///
/// repo.insert_contact(&Contact::new("contact1", "1234567891")).await?;
/// let all = repo.get_all_contacts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    /// Creates a new ContactRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ContactRepository { pool }
    }

    /// Lists every contact in insertion order. Empty table → empty vec.
    pub async fn get_all_contacts(&self) -> DbResult<Vec<Contact>> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT entryId, name, mobile
            FROM contacts
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = contacts.len(), "Loaded contacts");
        Ok(contacts)
    }

    /// Gets a contact by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Contact))` - Contact found
    /// * `Ok(None)` - No row matches (including an empty id)
    pub async fn get_contact_by_id(&self, id: &str) -> DbResult<Option<Contact>> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT entryId, name, mobile
            FROM contacts
            WHERE entryId = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    /// Inserts a contact, replacing any row with the same id.
    pub async fn insert_contact(&self, contact: &Contact) -> DbResult<()> {
        debug!(id = %contact.id, "Inserting contact");

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO contacts (entryId, name, mobile)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.mobile)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts several contacts in one transaction, replacing rows with
    /// matching ids. Either every row is written or none is.
    pub async fn insert_contacts(&self, contacts: &[Contact]) -> DbResult<()> {
        debug!(count = contacts.len(), "Inserting contacts");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        for contact in contacts {
            sqlx::query(
                r#"
                INSERT OR REPLACE INTO contacts (entryId, name, mobile)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&contact.id)
            .bind(&contact.name)
            .bind(&contact.mobile)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Overwrites name and mobile of the row with the same id.
    ///
    /// ## Returns
    /// Rows affected: 1 when the id matched, 0 otherwise (no-op).
    pub async fn update_contact(&self, contact: &Contact) -> DbResult<u64> {
        debug!(id = %contact.id, "Updating contact");

        let result = sqlx::query(
            r#"
            UPDATE contacts SET
                name = ?2,
                mobile = ?3
            WHERE entryId = ?1
            "#,
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.mobile)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the row with the given id; 0 rows affected when unmatched.
    pub async fn delete_contact_by_id(&self, id: &str) -> DbResult<u64> {
        debug!(id = %id, "Deleting contact");

        let result = sqlx::query("DELETE FROM contacts WHERE entryId = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Clears the table. Returns the number of rows removed.
    pub async fn delete_all_contacts(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM contacts")
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Deleted all contacts");
        Ok(result.rows_affected())
    }

    /// Counts stored contacts (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    const INVALID_ID: &str = "invalidId";

    async fn setup() -> (Database, ContactRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.contacts();
        (db, repo)
    }

    fn contact1() -> Contact {
        Contact::new("contact1", "1234567891")
    }

    fn contact2() -> Contact {
        Contact::new("contact2", "1234567892")
    }

    fn new_contact_with_id(id: &str) -> Contact {
        Contact::with_id("newContact", "1234567893", id)
    }

    #[tokio::test]
    async fn test_insert_contact() {
        let (db, repo) = setup().await;
        let contact = contact1();

        repo.insert_contact(&contact).await.unwrap();

        let contacts = repo.get_all_contacts().await.unwrap();
        assert_eq!(contacts, vec![contact]);
        db.close().await;
    }

    #[tokio::test]
    async fn test_get_all_contacts_keeps_insertion_order() {
        let (db, repo) = setup().await;
        let (first, second) = (contact1(), contact2());

        repo.insert_contact(&first).await.unwrap();
        repo.insert_contact(&second).await.unwrap();

        let contacts = repo.get_all_contacts().await.unwrap();
        assert_eq!(contacts, vec![first, second]);
        db.close().await;
    }

    #[tokio::test]
    async fn test_get_all_contacts_empty_table() {
        let (db, repo) = setup().await;

        let contacts = repo.get_all_contacts().await.unwrap();
        assert!(contacts.is_empty());
        db.close().await;
    }

    #[tokio::test]
    async fn test_get_contact_by_id() {
        let (db, repo) = setup().await;
        let contact = contact1();
        repo.insert_contact(&contact).await.unwrap();

        let loaded = repo.get_contact_by_id(&contact.id).await.unwrap();
        assert_eq!(loaded, Some(contact));
        db.close().await;
    }

    #[tokio::test]
    async fn test_get_contact_by_unknown_or_empty_id() {
        let (db, repo) = setup().await;
        repo.insert_contact(&contact1()).await.unwrap();

        assert!(repo.get_contact_by_id(INVALID_ID).await.unwrap().is_none());
        assert!(repo.get_contact_by_id("").await.unwrap().is_none());
        db.close().await;
    }

    #[tokio::test]
    async fn test_insert_same_id_replaces() {
        let (db, repo) = setup().await;
        let original = contact1();
        repo.insert_contact(&original).await.unwrap();

        let replacement = new_contact_with_id(&original.id);
        repo.insert_contact(&replacement).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let loaded = repo.get_contact_by_id(&original.id).await.unwrap();
        assert_eq!(loaded, Some(replacement));
        db.close().await;
    }

    #[tokio::test]
    async fn test_insert_contacts_batch() {
        let (db, repo) = setup().await;
        let (first, second) = (contact1(), contact2());
        let replacement = new_contact_with_id(&first.id);

        repo.insert_contacts(&[first.clone(), second.clone()])
            .await
            .unwrap();
        repo.insert_contacts(&[replacement.clone()]).await.unwrap();

        // The replaced row is re-inserted, so it now sorts last
        let contacts = repo.get_all_contacts().await.unwrap();
        assert_eq!(contacts, vec![second, replacement]);
        db.close().await;
    }

    #[tokio::test]
    async fn test_insert_contacts_empty_batch() {
        let (db, repo) = setup().await;

        repo.insert_contacts(&[]).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
        db.close().await;
    }

    #[tokio::test]
    async fn test_update_contact() {
        let (db, repo) = setup().await;
        let original = contact1();
        repo.insert_contact(&original).await.unwrap();

        let updated = new_contact_with_id(&original.id);
        let affected = repo.update_contact(&updated).await.unwrap();

        assert_eq!(affected, 1);
        let loaded = repo.get_contact_by_id(&original.id).await.unwrap();
        assert_eq!(loaded, Some(updated));
        db.close().await;
    }

    #[tokio::test]
    async fn test_update_contact_unknown_or_empty_id_is_noop() {
        let (db, repo) = setup().await;
        let original = contact1();
        repo.insert_contact(&original).await.unwrap();

        for id in [INVALID_ID, ""] {
            let affected = repo.update_contact(&new_contact_with_id(id)).await.unwrap();
            assert_eq!(affected, 0);
        }

        let contacts = repo.get_all_contacts().await.unwrap();
        assert_eq!(contacts, vec![original]);
        db.close().await;
    }

    #[tokio::test]
    async fn test_delete_contact_by_id() {
        let (db, repo) = setup().await;
        let first = Contact::with_id("contact1", "1234567891", "A");
        let second = Contact::with_id("contact2", "1234567892", "B");
        repo.insert_contact(&first).await.unwrap();
        repo.insert_contact(&second).await.unwrap();

        let affected = repo.delete_contact_by_id("A").await.unwrap();

        assert_eq!(affected, 1);
        let contacts = repo.get_all_contacts().await.unwrap();
        assert_eq!(contacts, vec![second]);
        db.close().await;
    }

    #[tokio::test]
    async fn test_delete_contact_unknown_or_empty_id_is_noop() {
        let (db, repo) = setup().await;
        repo.insert_contact(&contact1()).await.unwrap();

        assert_eq!(repo.delete_contact_by_id(INVALID_ID).await.unwrap(), 0);
        assert_eq!(repo.delete_contact_by_id("").await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
        db.close().await;
    }

    #[tokio::test]
    async fn test_delete_all_contacts() {
        let (db, repo) = setup().await;
        repo.insert_contact(&contact1()).await.unwrap();
        repo.insert_contact(&contact2()).await.unwrap();

        let removed = repo.delete_all_contacts().await.unwrap();

        assert_eq!(removed, 2);
        assert!(repo.get_all_contacts().await.unwrap().is_empty());
        // Clearing an empty table is fine too
        assert_eq!(repo.delete_all_contacts().await.unwrap(), 0);
        db.close().await;
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_error() {
        let (db, repo) = setup().await;
        db.close().await;

        let err = repo.get_all_contacts().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }
}
