//! Assertions over recorded domain events.

use questline_core::event::DomainEvent;

/// Returns the event type of every event, in order.
pub fn event_types<E: DomainEvent>(events: &[E]) -> Vec<&'static str> {
    events.iter().map(DomainEvent::event_type).collect()
}

/// Asserts that the events carry sequence numbers `first, first + 1, ...`.
///
/// # Panics
///
/// Panics on the first gap or repeat.
pub fn assert_contiguous_sequence<E: DomainEvent>(events: &[E], first: i64) {
    for (offset, event) in (0_i64..).zip(events) {
        let actual = event.metadata().sequence_number;
        assert_eq!(
            actual,
            first + offset,
            "event {} ({}) has sequence number {actual}",
            offset,
            event.event_type()
        );
    }
}
