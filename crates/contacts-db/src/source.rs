//! # Local Data Source
//!
//! SQLite-backed implementation of [`ContactsDataSource`].
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  ContactsLocalDataSource                                │
//! │                                                                         │
//! │  caller task                         I/O runtime handle                 │
//! │  ───────────                         ──────────────────                 │
//! │  source.get_contact("A").await                                          │
//! │       │                                                                 │
//! │       │  io.spawn(repo.get_contact_by_id("A"))                          │
//! │       ├───────────────────────────────► runs ContactRepository query   │
//! │       │                                          │                      │
//! │       │  JoinHandle.await  ◄─────────────────────┘                      │
//! │       ▼                                                                 │
//! │  DbResult → Outcome (reads) or CoreResult (mutations)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call schedules independently; nothing orders two calls except the
//! caller awaiting one before issuing the next. A panic inside a spawned
//! operation is resumed on the caller. Dropping the caller's future aborts
//! the spawned operation at its next suspension point.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use contacts_core::{Contact, ContactsDataSource, CoreError, CoreResult, Outcome};

use crate::error::{DbError, DbResult};
use crate::repository::contact::ContactRepository;

/// Contacts data source over the local database.
#[derive(Debug, Clone)]
pub struct ContactsLocalDataSource {
    contacts: ContactRepository,
    io: Handle,
}

impl ContactsLocalDataSource {
    /// Creates a data source that dispatches onto the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime, like
    /// [`Handle::current`]. Use [`with_io_handle`](Self::with_io_handle)
    /// to pick the runtime explicitly.
    pub fn new(contacts: ContactRepository) -> Self {
        Self::with_io_handle(contacts, Handle::current())
    }

    /// Creates a data source that dispatches onto the given runtime.
    pub fn with_io_handle(contacts: ContactRepository, io: Handle) -> Self {
        ContactsLocalDataSource { contacts, io }
    }

    /// Runs `op` on the I/O runtime and waits for it.
    async fn dispatch<T, F, Fut>(&self, op: F) -> DbResult<T>
    where
        T: Send + 'static,
        F: FnOnce(ContactRepository) -> Fut + Send,
        Fut: Future<Output = DbResult<T>> + Send + 'static,
    {
        let task = AbortOnDrop(self.io.spawn(op(self.contacts.clone())));

        match task.await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => Err(DbError::Internal(format!(
                "background operation cancelled: {err}"
            ))),
        }
    }
}

/// Aborts the spawned operation when the awaiting caller goes away.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[async_trait]
impl ContactsDataSource for ContactsLocalDataSource {
    async fn get_contacts(&self) -> Outcome<Vec<Contact>> {
        let result = self
            .dispatch(|repo| async move { repo.get_all_contacts().await })
            .await;

        match result {
            Ok(contacts) => Outcome::Success(contacts),
            Err(err) => {
                warn!(error = %err, "Failed to load contacts");
                Outcome::Error(err.into())
            }
        }
    }

    async fn get_contact(&self, contact_id: &str) -> Outcome<Contact> {
        let id = contact_id.to_string();
        let result = self
            .dispatch(|repo| async move { repo.get_contact_by_id(&id).await })
            .await;

        match result {
            Ok(Some(contact)) => Outcome::Success(contact),
            Ok(None) => {
                debug!(id = %contact_id, "Contact not found");
                Outcome::Error(CoreError::ContactNotFound(contact_id.to_string()))
            }
            Err(err) => {
                warn!(id = %contact_id, error = %err, "Failed to load contact");
                Outcome::Error(err.into())
            }
        }
    }

    async fn save_contact(&self, contact: &Contact) -> CoreResult<()> {
        let contact = contact.clone();
        self.dispatch(|repo| async move { repo.insert_contact(&contact).await })
            .await?;
        Ok(())
    }

    async fn save_contacts(&self, contacts: &[Contact]) -> CoreResult<()> {
        let contacts = contacts.to_vec();
        self.dispatch(|repo| async move { repo.insert_contacts(&contacts).await })
            .await?;
        Ok(())
    }

    async fn update_contact(&self, contact: &Contact) -> CoreResult<()> {
        let contact = contact.clone();
        let affected = self
            .dispatch(|repo| async move { repo.update_contact(&contact).await })
            .await?;

        if affected == 0 {
            debug!("Update matched no contact");
        }
        Ok(())
    }

    async fn delete_contact(&self, contact_id: &str) -> CoreResult<()> {
        let id = contact_id.to_string();
        let affected = self
            .dispatch(|repo| async move { repo.delete_contact_by_id(&id).await })
            .await?;

        if affected == 0 {
            debug!(id = %contact_id, "Delete matched no contact");
        }
        Ok(())
    }

    async fn delete_all_contacts(&self) -> CoreResult<()> {
        self.dispatch(|repo| async move { repo.delete_all_contacts().await })
            .await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
