//! # tally-engine
//!
//! In-memory entity stores with persist-on-mutation semantics, plus the
//! purchase transaction coordinator that ties them together. Stores are
//! generic over the `Record` trait from `tally-core` and write their full
//! container to an `IBlobStorage` backend after every successful mutation.

pub mod context;
pub mod purchase;
pub mod store;

pub use context::AppContext;
pub use purchase::{submit_purchase, PurchaseRequest};
pub use store::EntityStore;
