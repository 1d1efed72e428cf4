//! Modal dialog surface
//!
//! One dialog exists at a time. Content is a structured payload; the
//! confirmation workflow defers wiring its controls until they are displayed.

pub mod content;
pub mod controller;

pub use content::{DetailRow, FormField, ListingDraft, ListingForm, ModalContent, SelectField, ToolPanel};
pub use controller::{ConfirmChoice, ConfirmHandler, ModalController};
