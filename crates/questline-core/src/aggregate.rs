//! Aggregate root abstraction.

use crate::event::DomainEvent;

/// Trait for aggregate roots that record domain events as they mutate.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> u64;

    /// Returns the current version (number of events taken so far).
    fn version(&self) -> i64;

    /// Returns events recorded since the last call to
    /// [`take_uncommitted_events`](Self::take_uncommitted_events).
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Drains the uncommitted events and advances the version past them.
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event>;
}
