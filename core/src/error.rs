//! Error types for the envelope writer.
//!
//! # Design
//! Only two things can go wrong when writing an envelope: the payload has no
//! JSON representation, or the sink refuses the bytes. Validation problems are
//! not errors here; they travel inside a `fail` envelope's `data`.

use std::io;

use thiserror::Error;

/// Errors returned by [`crate::write`] and the helpers built on it.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The body could not be serialized to JSON. Nothing was written.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink failed while accepting the body bytes.
    #[error("transport write failed: {0}")]
    Transport(#[from] io::Error),
}
