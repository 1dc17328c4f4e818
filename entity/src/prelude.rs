pub use super::spam_filter_channel::Entity as SpamFilterChannel;
