//! Core business logic - framework-agnostic ledger, checkout, and
//! fulfillment operations.
//!
//! Every function takes the acting account or order identifier explicitly;
//! there is no ambient "current session" state. Multi-entity mutations run
//! inside database transactions so a failure never leaves partial state.

/// Account registration, lookups, and administration (recharge)
pub mod account;
/// Cart accumulation before an order exists
pub mod cart;
/// The checkout/payment transaction
pub mod checkout;
/// Complaint intake and resolution
pub mod complaint;
/// Feedback intake
pub mod feedback;
/// The order fulfillment pipeline
pub mod fulfillment;
/// Pickup and follow-up token generation
pub mod token;
