//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the header, listing presentation, and shared forms.
//! Page-level orchestration stays in `pages`; components read app-wide
//! state from context or take page state as props.

pub mod filter_bar;
pub mod header;
pub mod item_form;
pub mod listing_card;
pub mod map_view;
pub mod pagination;
pub mod star_rating;
