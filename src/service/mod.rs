//! Business logic layer.
//!
//! Services sit between the Discord event handlers and the data layer. They own the
//! moderation rules and keep persisted state and in-memory state consistent.

pub mod spam_filter;
