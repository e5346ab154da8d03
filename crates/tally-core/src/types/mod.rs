//! Core value types: identifiers and domain records.

pub mod identifiers;
pub mod records;

pub use identifiers::RecordId;
pub use records::{
    InventoryStatus, Product, ProductDraft, Purchase, PurchaseDraft, User, UserDraft,
};
