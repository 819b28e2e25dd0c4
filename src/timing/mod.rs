//! Timing module - Cooperative timer queue driven by an injected clock

mod queue;

pub use queue::{TimerHandle, TimerQueue};
