//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `listings`, `chat`, `ui`). Only the
//! session and UI state are provided app-wide; listings and chat state are
//! page-local and dropped on navigation.

pub mod chat;
pub mod listings;
pub mod session;
pub mod ui;
