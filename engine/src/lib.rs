//! Unitconv Conversion Engine
//!
//! The uniform dispatch contract over the four conversion kinds:
//! normalize units, validate membership, compute, round per kind, and
//! return a typed result or a typed failure together with the elapsed
//! wall time for the caller's metrics and logs.

pub mod dispatcher;
pub mod error;

pub use dispatcher::{ConversionKind, Dispatched, Dispatcher};
pub use error::{ConvertError, ConvertResult};
