//! Domain record types and their drafts.
//!
//! Records are plain serde structs. A draft is the same shape minus the
//! identifier, with optional fields where the store supplies defaults at
//! materialization.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::constants::{
    PRODUCT_BLOB_KEY, PRODUCT_CODE_LENGTH, PRODUCT_PLACEHOLDER_IMAGE, PURCHASE_BLOB_KEY,
    USER_BLOB_KEY,
};
use crate::errors::StoreError;
use crate::traits::record::Record;
use crate::types::identifiers::RecordId;

/// Inventory status shown next to a product.
///
/// Informational only: set by the editor, never derived from quantity,
/// so it can disagree with actual stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InventoryStatus {
    #[default]
    #[serde(rename = "INSTOCK")]
    InStock,
    #[serde(rename = "LOWSTOCK")]
    LowStock,
    #[serde(rename = "OUTOFSTOCK")]
    OutOfStock,
}

// ─── Product ────────────────────────────────────────────────────────

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub quantity: u32,
    pub rating: u8,
    pub image: String,
    pub inventory_status: InventoryStatus,
}

/// Everything the product editor supplies. Optional fields fall back to
/// store defaults at materialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display code; auto-generated when absent.
    pub code: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub quantity: u32,
    pub rating: u8,
    /// Image reference; defaults to the placeholder asset.
    pub image: Option<String>,
    pub inventory_status: Option<InventoryStatus>,
}

impl Product {
    /// Draft carrying this product's current fields, for position-preserving
    /// updates (the purchase stock decrement goes through this).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            code: Some(self.code.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            quantity: self.quantity,
            rating: self.rating,
            image: Some(self.image.clone()),
            inventory_status: Some(self.inventory_status),
        }
    }
}

impl Record for Product {
    type Draft = ProductDraft;

    const KIND: &'static str = "product";
    const BLOB_KEY: &'static str = PRODUCT_BLOB_KEY;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(draft: &Self::Draft) -> Result<(), StoreError> {
        require_non_empty(Self::KIND, "name", &draft.name)?;
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(StoreError::validation(
                Self::KIND,
                "price must not be negative",
            ));
        }
        Ok(())
    }

    fn materialize(id: RecordId, draft: Self::Draft) -> Self {
        Self {
            id,
            code: draft
                .code
                .unwrap_or_else(|| RecordId::generate_with_length(PRODUCT_CODE_LENGTH).to_string()),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            quantity: draft.quantity,
            rating: draft.rating,
            image: draft
                .image
                .unwrap_or_else(|| PRODUCT_PLACEHOLDER_IMAGE.to_string()),
            inventory_status: draft.inventory_status.unwrap_or_default(),
        }
    }
}

// ─── User ───────────────────────────────────────────────────────────

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// User draft. All three fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Record for User {
    type Draft = UserDraft;

    const KIND: &'static str = "user";
    const BLOB_KEY: &'static str = USER_BLOB_KEY;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(draft: &Self::Draft) -> Result<(), StoreError> {
        require_non_empty(Self::KIND, "name", &draft.name)?;
        require_non_empty(Self::KIND, "email", &draft.email)?;
        require_non_empty(Self::KIND, "phone", &draft.phone)?;
        Ok(())
    }

    fn materialize(id: RecordId, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        }
    }
}

// ─── Purchase ───────────────────────────────────────────────────────

/// A committed purchase. Created only by the transaction coordinator and
/// never edited. The name fields are point-in-time snapshots so the record
/// stays meaningful after the referenced product or user changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: RecordId,
    pub user_id: RecordId,
    pub user_name: String,
    pub product_id: RecordId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// unit_price * quantity, computed at materialization.
    pub total: f64,
    /// Creation instant, unix epoch milliseconds. Immutable.
    pub created_at: i64,
}

/// Purchase draft assembled by the coordinator after reference resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDraft {
    pub user_id: RecordId,
    pub user_name: String,
    pub product_id: RecordId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl Record for Purchase {
    type Draft = PurchaseDraft;

    const KIND: &'static str = "purchase";
    const BLOB_KEY: &'static str = PURCHASE_BLOB_KEY;
    // Removing purchase history silently breaks the audit trail implied by
    // the denormalized snapshots; the store logs a warning when it happens.
    const AUDIT_ON_REMOVE: bool = true;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(draft: &Self::Draft) -> Result<(), StoreError> {
        if draft.user_id.is_blank() {
            return Err(StoreError::validation(Self::KIND, "user id is required"));
        }
        if draft.product_id.is_blank() {
            return Err(StoreError::validation(Self::KIND, "product id is required"));
        }
        if draft.quantity == 0 {
            return Err(StoreError::validation(
                Self::KIND,
                "quantity must be greater than zero",
            ));
        }
        if !draft.unit_price.is_finite() || draft.unit_price <= 0.0 {
            return Err(StoreError::validation(
                Self::KIND,
                "unit price must be greater than zero",
            ));
        }
        Ok(())
    }

    fn materialize(id: RecordId, draft: Self::Draft) -> Self {
        let total = draft.unit_price * f64::from(draft.quantity);
        Self {
            id,
            user_id: draft.user_id,
            user_name: draft.user_name,
            product_id: draft.product_id,
            product_name: draft.product_name,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            total,
            created_at: current_unix_time_ms(),
        }
    }
}

/// Current unix time in milliseconds.
pub fn current_unix_time_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn require_non_empty(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation {
            entity,
            message: format!("{field} is required"),
        });
    }
    Ok(())
}
