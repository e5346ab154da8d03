//! End-to-end durability: stores over SQLite survive a full reopen.

use std::sync::Arc;

use tally_core::types::records::{ProductDraft, UserDraft};
use tally_engine::{AppContext, PurchaseRequest};
use tally_storage::SqliteBlobStorage;
use tempfile::TempDir;

#[test]
fn purchase_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("tally.db");

    let (user_id, product_id, purchase_id) = {
        let storage = Arc::new(SqliteBlobStorage::open(&db_path).unwrap());
        let mut ctx = AppContext::open(storage).unwrap();

        let user = ctx
            .users
            .create(UserDraft {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
            })
            .unwrap();
        let product = ctx
            .products
            .create(ProductDraft {
                name: "Blue Band".to_string(),
                description: "desc".to_string(),
                price: 5.0,
                category: "Fitness".to_string(),
                quantity: 10,
                rating: 4,
                ..ProductDraft::default()
            })
            .unwrap();

        let purchase = ctx
            .submit_purchase(&PurchaseRequest {
                user_id: user.id.clone(),
                product_id: product.id.clone(),
                quantity: 3,
                unit_price: 5.0,
            })
            .unwrap();

        (user.id, product.id, purchase.id)
    };

    let storage = Arc::new(SqliteBlobStorage::open(&db_path).unwrap());
    let ctx = AppContext::open(storage).unwrap();

    assert_eq!(ctx.users.find_by_id(&user_id).unwrap().name, "Ada");

    let product = ctx.products.find_by_id(&product_id).unwrap();
    assert_eq!(product.quantity, 7);
    assert_eq!(product.code.len(), 5);
    assert_eq!(product.image, "product-placeholder.svg");

    let purchase = ctx.purchases.find_by_id(&purchase_id).unwrap();
    assert_eq!(purchase.total, 15.0);
    assert_eq!(purchase.user_name, "Ada");
    assert_eq!(purchase.product_name, "Blue Band");
}

#[test]
fn fresh_database_opens_empty() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(SqliteBlobStorage::open(&dir.path().join("tally.db")).unwrap());
    let ctx = AppContext::open(storage).unwrap();

    assert!(ctx.products.is_empty());
    assert!(ctx.users.is_empty());
    assert!(ctx.purchases.is_empty());
}

#[test]
fn stores_share_one_database_without_interference() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(SqliteBlobStorage::open(&dir.path().join("tally.db")).unwrap());
    let mut ctx = AppContext::open(storage).unwrap();

    ctx.users
        .create(UserDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
        })
        .unwrap();

    assert_eq!(ctx.users.len(), 1);
    assert!(ctx.products.is_empty());
    assert!(ctx.purchases.is_empty());
}
