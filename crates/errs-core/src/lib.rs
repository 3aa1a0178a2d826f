//! Portable application errors
//!
//! An [`Error`] pairs a semantic [`Code`] with a human-readable message and
//! knows nothing about transports. Adapter crates translate the code into a
//! transport's status vocabulary at the system boundary, using [`classify`]
//! to find the error inside arbitrary wrapping and to redact internal detail.

#![allow(clippy::must_use_candidate)]

mod code;
#[cfg(feature = "anyhow")]
mod context;
mod error;
mod inspect;

pub use code::Code;
#[cfg(feature = "anyhow")]
pub use context::{classify_anyhow, error_code_anyhow, error_message_anyhow, find_anyhow};
pub use error::Error;
pub use inspect::{
    Classified, INTERNAL_MESSAGE, MAX_CHAIN_DEPTH, classify, error_code, error_code_opt, error_message,
    error_message_opt, find,
};
