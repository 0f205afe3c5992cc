use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{Ticket, TicketId, TicketStatus, UserId};

use super::lock;

/// Ticket store backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryTickets {
    rows: Mutex<Vec<Ticket>>,
}

impl InMemoryTickets {
    /// Store seeded with `tickets`.
    pub fn with_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        Self {
            rows: Mutex::new(tickets.into_iter().collect()),
        }
    }

    /// Copy of every stored row, replies included.
    pub fn snapshot(&self) -> Result<Vec<Ticket>, TicketRepositoryError> {
        Ok(lock(&self.rows, "tickets", TicketRepositoryError::query)?.clone())
    }

    fn remove_threads(&self, roots: &[TicketId]) -> Result<u64, TicketRepositoryError> {
        let mut rows = lock(&self.rows, "tickets", TicketRepositoryError::query)?;
        let before = rows.len();
        rows.retain(|ticket| {
            !roots.contains(&ticket.id)
                && ticket.reply_to.is_none_or(|parent| !roots.contains(&parent))
        });
        Ok(u64::try_from(before - rows.len()).unwrap_or(u64::MAX))
    }
}

#[async_trait]
impl TicketRepository for InMemoryTickets {
    async fn find_for_owner(
        &self,
        ticket_id: TicketId,
        owner: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let rows = lock(&self.rows, "tickets", TicketRepositoryError::query)?;
        Ok(rows
            .iter()
            .find(|ticket| ticket.id == ticket_id && ticket.is_owned_by(owner))
            .cloned())
    }

    async fn delete_ticket(&self, ticket_id: TicketId) -> Result<u64, TicketRepositoryError> {
        self.remove_threads(&[ticket_id])
    }

    async fn delete_by_status(
        &self,
        owner: UserId,
        status: TicketStatus,
    ) -> Result<u64, TicketRepositoryError> {
        let roots: Vec<TicketId> = {
            let rows = lock(&self.rows, "tickets", TicketRepositoryError::query)?;
            rows.iter()
                .filter(|ticket| {
                    ticket.is_thread_root() && ticket.status == status && ticket.is_owned_by(owner)
                })
                .map(|ticket| ticket.id)
                .collect()
        };
        if roots.is_empty() {
            return Ok(0);
        }
        self.remove_threads(&roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn user(raw: i64) -> UserId {
        UserId::new(raw).expect("valid id")
    }

    fn ticket(id: i64, from: i64, status: TicketStatus, reply_to: Option<i64>) -> Ticket {
        Ticket {
            id: TicketId::new(id),
            from: user(from),
            to: user(1),
            status,
            reply_to: reply_to.map(TicketId::new),
            subject: format!("ticket {id}"),
        }
    }

    #[fixture]
    fn store() -> InMemoryTickets {
        InMemoryTickets::with_tickets([
            ticket(1, 7, TicketStatus::Open, None),
            ticket(2, 7, TicketStatus::Open, Some(1)),
            ticket(3, 7, TicketStatus::Closed, None),
            ticket(4, 8, TicketStatus::Open, None),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_hides_tickets_of_other_customers(store: InMemoryTickets) {
        let found = store
            .find_for_owner(TicketId::new(4), user(7))
            .await
            .expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn recipient_counts_as_owner(store: InMemoryTickets) {
        let found = store
            .find_for_owner(TicketId::new(4), user(1))
            .await
            .expect("lookup");
        assert_eq!(found.map(|t| t.id), Some(TicketId::new(4)));
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_a_thread_removes_replies(store: InMemoryTickets) {
        let removed = store.delete_ticket(TicketId::new(1)).await.expect("delete");
        assert_eq!(removed, 2);
        let ids: Vec<i64> = store
            .snapshot()
            .expect("snapshot")
            .iter()
            .map(|t| t.id.get())
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn bulk_delete_is_scoped_to_owner_and_status(store: InMemoryTickets) {
        let removed = store
            .delete_by_status(user(7), TicketStatus::Open)
            .await
            .expect("delete");
        assert_eq!(removed, 2);
        let ids: Vec<i64> = store
            .snapshot()
            .expect("snapshot")
            .iter()
            .map(|t| t.id.get())
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }
}
