pub mod amortization;
pub mod error;
pub mod types;

#[cfg(feature = "financing")]
pub mod financing;

#[cfg(feature = "brrrr")]
pub mod brrrr;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "scoring")]
pub mod scoring;

pub use error::DealModelError;
pub use types::*;

/// Standard result type for all fallible dealsletter-core operations.
///
/// The calculators themselves are total functions and never return this;
/// it only appears at the typed-input boundary (validating constructors,
/// JSON deserialisation in callers).
pub type DealModelResult<T> = Result<T, DealModelError>;
