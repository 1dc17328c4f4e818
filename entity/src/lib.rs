pub mod prelude;

pub mod spam_filter_channel;
