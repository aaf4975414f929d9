/// Event listing document.
pub mod event;

/// Booking request document.
pub mod booking;

pub use booking::Booking;
pub use event::Event;
