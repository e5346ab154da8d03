//! Contracts between the stores and their collaborators.

pub mod record;
pub mod storage;

pub use record::Record;
pub use storage::IBlobStorage;
