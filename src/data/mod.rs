//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so that the
//! service layer never handles entity types directly.

pub mod spam_filter_channel;

#[cfg(test)]
mod test;
