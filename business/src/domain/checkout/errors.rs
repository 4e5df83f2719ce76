use rust_decimal::Decimal;

/// Failures of the external order-creation endpoint.
#[derive(Debug, thiserror::Error)]
pub enum OrderGatewayError {
    #[error("order_gateway.rejected")]
    Rejected { reason: String },
    #[error("order_gateway.unavailable")]
    Unavailable,
}

/// Failures of the external points-ledger debit endpoint.
#[derive(Debug, thiserror::Error)]
pub enum PointsLedgerError {
    #[error("points_ledger.rejected")]
    Rejected { reason: String },
    #[error("points_ledger.unavailable")]
    Unavailable,
}

/// Checkout failures, one variant per user-facing reason.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.cart_empty")]
    EmptyCart,
    #[error("checkout.already_in_progress")]
    CheckoutInProgress,
    #[error("checkout.not_authenticated")]
    NotAuthenticated,
    #[error("checkout.profile_not_loaded")]
    ProfileNotLoaded,
    /// Balance is short by exactly `shortfall`; surfaced so the caller can
    /// tell the buyer how much is missing.
    #[error("checkout.insufficient_points")]
    InsufficientPoints { shortfall: Decimal },
    /// No checkout PIN configured yet; callers route the buyer to the PIN
    /// setup flow rather than showing a generic error.
    #[error("checkout.pin_not_configured")]
    PinNotConfigured,
    #[error("checkout.pin_required")]
    PinRequired,
    #[error("checkout.pin_incorrect")]
    PinIncorrect,
    /// Order creation failed; nothing was committed.
    #[error("checkout.order_rejected")]
    OrderRejected(#[from] OrderGatewayError),
}
