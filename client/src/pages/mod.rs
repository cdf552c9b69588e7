//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submitting,
//! navigating) and delegates rendering details to `components`.

pub mod add_item;
pub mod book_item;
pub mod chat;
pub mod edit_item;
pub mod listings;
pub mod login;
pub mod payment_outcome;
pub mod review_item;
pub mod signup;
