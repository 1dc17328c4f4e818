//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let channel = factory::create_spam_filter_channel(&db, guild_id, channel_id).await?;
//!
//! // Customize through the builder
//! let channel = factory::spam_filter_channel::SpamFilterChannelFactory::new(&db)
//!     .guild_id(111)
//!     .enabled_by(222)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod spam_filter_channel;

pub use spam_filter_channel::create_spam_filter_channel;
