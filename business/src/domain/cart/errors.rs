/// Cart transition errors.
/// Use code-style identifiers for all error variants for i18n compatibility;
/// the conflicting values travel as fields so callers can name them in
/// user-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_not_positive")]
    QuantityNotPositive,
    #[error("cart.supplier_mismatch")]
    SupplierMismatch { in_cart: String, attempted: String },
    #[error("cart.category_mismatch")]
    CategoryMismatch { in_cart: String, attempted: String },
    #[error("cart.checkout_in_progress")]
    CheckoutInProgress,
}
