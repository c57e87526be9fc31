//! Unified error types for the canteen ledger.
//!
//! All failures in the core are local: they are detected at the point of the
//! operation, reported to the immediate caller, and never leave partial state
//! behind (multi-entity paths run inside database transactions).

use crate::entities::order::OrderStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: i64 },

    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i32 },

    #[error("Invalid input: {field} must not be empty")]
    InvalidInput { field: &'static str },

    #[error("Rating must be between 1 and 5, got {rating}")]
    InvalidRating { rating: i32 },

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: i64, required: i64 },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("No active account for this session")]
    NoActiveAccount,

    #[error("Account not found: {id}")]
    AccountNotFound { id: String },

    #[error("Order not found: {id}")]
    OrderNotFound { id: i64 },

    #[error("Complaint not found: {id}")]
    ComplaintNotFound { id: i64 },

    #[error("Cannot {action} an order that is {from}")]
    InvalidTransition {
        from: OrderStatus,
        action: &'static str,
    },

    #[error("Could not generate an unused token after {attempts} attempts")]
    TokenExhausted { attempts: u32 },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
