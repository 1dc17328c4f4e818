//! Spam Filter Bot Test Utils
//!
//! Provides shared testing utilities for the spam filter bot: a builder for test contexts
//! backed by in-memory SQLite databases, factories for inserting entities, and factories
//! for Serenity API objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::SpamFilterChannel;
//!
//! #[tokio::test]
//! async fn test_channel_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(SpamFilterChannel)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
