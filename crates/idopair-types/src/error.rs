//! Error types for the idopair escrow.
//!
//! All errors use the `IDO_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Authorization errors
//! - 2xx: Argument errors
//! - 3xx: Transfer / code-update errors
//! - 4xx: Storage errors
//! - 9xx: General / internal errors
//!
//! Every error aborts the whole invocation: there is no local recovery, no
//! retry, and no partial-success reporting. Staged storage writes and staged
//! contract events are discarded on the first `Err`.

use thiserror::Error;

use crate::ScriptHash;

/// Central error enum for all idopair operations.
#[derive(Debug, Error)]
pub enum IdoPairError {
    // =================================================================
    // Authorization Errors (1xx)
    // =================================================================
    /// The caller failed the administrator witness check.
    #[error("IDO_ERR_100: Not authorized: {operation} requires the administrator")]
    NotAuthorized { operation: &'static str },

    // =================================================================
    // Argument Errors (2xx)
    // =================================================================
    /// A supplied identity or value is malformed.
    #[error("IDO_ERR_200: Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // =================================================================
    // Transfer / Code-Update Errors (3xx)
    // =================================================================
    /// The guarded-transfer primitive reported failure. Fatal: the entire
    /// invocation aborts, no partial settlement exists.
    #[error("IDO_ERR_300: Transfer failed: {amount} of {token} to {to}")]
    TransferFailed {
        token: ScriptHash,
        to: ScriptHash,
        amount: u128,
    },

    /// The code-host collaborator rejected the replacement.
    #[error("IDO_ERR_301: Code update failed: {reason}")]
    CodeUpdateFailed { reason: String },

    // =================================================================
    // Storage Errors (4xx)
    // =================================================================
    /// A key-value backend failure, or a persisted value with the wrong
    /// width for its key.
    #[error("IDO_ERR_400: Storage error: {0}")]
    Storage(String),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("IDO_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, IdoPairError>;
