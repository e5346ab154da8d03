//! Purchase transaction coordinator.
//!
//! Runs the four-step flow: request validation, reference resolution,
//! stock check, commit. Every failure mode is detected before the commit
//! step touches a store, so a failed transaction leaves both stores
//! exactly as they were.

use tracing::info;

use tally_core::errors::PurchaseError;
use tally_core::types::identifiers::RecordId;
use tally_core::types::records::{Product, Purchase, PurchaseDraft, User};

use crate::store::EntityStore;

/// What a caller submits to buy a product.
#[derive(Debug, Clone)]
pub struct PurchaseRequest {
    pub user_id: RecordId,
    pub product_id: RecordId,
    pub quantity: u32,
    /// Price per unit at time of purchase. Supplied by the caller rather
    /// than read from the product, so promotional pricing is possible.
    pub unit_price: f64,
}

/// Execute a purchase transaction against the three stores.
///
/// On success the product's stock is decremented and a purchase record
/// with denormalized name snapshots is appended. The commit decrements
/// stock first; a storage fault between the two writes surfaces as a
/// store error with the decrement already persisted.
pub fn submit_purchase(
    products: &mut EntityStore<Product>,
    users: &EntityStore<User>,
    purchases: &mut EntityStore<Purchase>,
    request: &PurchaseRequest,
) -> Result<Purchase, PurchaseError> {
    // Step 1: structural validation, no store access.
    validate_request(request)?;

    // Step 2: resolve references.
    let user = users
        .find_by_id(&request.user_id)
        .ok_or_else(|| PurchaseError::Reference {
            entity: "user",
            id: request.user_id.clone(),
        })?;
    let product = products
        .find_by_id(&request.product_id)
        .ok_or_else(|| PurchaseError::Reference {
            entity: "product",
            id: request.product_id.clone(),
        })?;

    // Step 3: stock check.
    if product.quantity < request.quantity {
        return Err(PurchaseError::InsufficientStock {
            product_id: product.id.clone(),
            requested: request.quantity,
            available: product.quantity,
        });
    }

    // Snapshot everything needed for the commit before mutating.
    let user_name = user.name.clone();
    let product_name = product.name.clone();
    let mut product_draft = product.to_draft();
    product_draft.quantity = product.quantity - request.quantity;
    let product_id = product.id.clone();

    // Step 4: commit. Stock decrement first, then the purchase append.
    products.update(&product_id, product_draft)?;
    let purchase = purchases.create(PurchaseDraft {
        user_id: request.user_id.clone(),
        user_name,
        product_id: request.product_id.clone(),
        product_name,
        quantity: request.quantity,
        unit_price: request.unit_price,
    })?;

    info!(
        purchase_id = %purchase.id,
        product_id = %purchase.product_id,
        quantity = purchase.quantity,
        total = purchase.total,
        "purchase committed"
    );
    Ok(purchase)
}

/// Structural checks on the raw request, mirroring the purchase draft
/// validation so a bad request is rejected before any lookup.
fn validate_request(request: &PurchaseRequest) -> Result<(), PurchaseError> {
    if request.user_id.is_blank() {
        return Err(PurchaseError::Validation {
            message: "user id is required".to_string(),
        });
    }
    if request.product_id.is_blank() {
        return Err(PurchaseError::Validation {
            message: "product id is required".to_string(),
        });
    }
    if request.quantity == 0 {
        return Err(PurchaseError::Validation {
            message: "quantity must be greater than zero".to_string(),
        });
    }
    if !request.unit_price.is_finite() || request.unit_price <= 0.0 {
        return Err(PurchaseError::Validation {
            message: "unit price must be greater than zero".to_string(),
        });
    }
    Ok(())
}
