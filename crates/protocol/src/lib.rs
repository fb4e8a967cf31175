//! Shared protocol types for the triptych application.
//!
//! This crate defines the [`Message`] enum: the single contract between
//! the event source (terminal events, the spinner tick timer, and the
//! pretend-work timer) and the application update loop. All events
//! reach the application as messages on one logical stream, in arrival
//! order.

pub mod message;

// Re-export the primary type at crate root for convenience
pub use message::Message;
