//! Shared constants for the tally workspace.

/// Alphabet for generated identifiers and product codes.
pub const ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated record identifiers.
pub const RECORD_ID_LENGTH: usize = 9;

/// Length of auto-generated product display codes.
pub const PRODUCT_CODE_LENGTH: usize = 5;

/// Attempts before the id generator widens the identifier instead of
/// retrying at the default length.
pub const ID_GENERATION_MAX_ATTEMPTS: usize = 16;

/// Image reference used when a product draft carries none.
pub const PRODUCT_PLACEHOLDER_IMAGE: &str = "product-placeholder.svg";

// Blob keys, one per store. Each key holds the full serialized container
// for that store.
pub const PRODUCT_BLOB_KEY: &str = "product-store-data";
pub const USER_BLOB_KEY: &str = "user-store-data";
pub const PURCHASE_BLOB_KEY: &str = "purchase-store-data";

/// Default database file name.
pub const DEFAULT_DB_FILE: &str = "tally.db";
