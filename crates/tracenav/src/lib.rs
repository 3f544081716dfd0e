//! Tracenav — navigation menu layer of the trace explorer UI.
//!
//! Builds the top-level navigation menu from a router configuration table
//! and normalizes it for rendering. The rendering layer itself lives
//! elsewhere; the `tracenav` binary is a minimal JSON-printing consumer.

pub mod error;
pub mod menu;
pub mod router;
