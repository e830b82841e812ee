//! Shared test doubles and assertions for the Questline character model.

mod clock;
mod events;

pub use clock::{FixedClock, fixed_clock};
pub use events::{assert_contiguous_sequence, event_types};
