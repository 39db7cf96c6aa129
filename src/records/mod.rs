//! Ingest-side submission shapes
//!
//! Submissions carry the loosely-typed payloads the intake forms produce;
//! [`NeedSubmission::into_record`] and [`ProviderSubmission::into_record`]
//! are where kind-specific defaults and timestamp canonicalization are
//! applied, so everything past the store boundary is a uniform
//! [`Record`](crate::core::Record).

pub mod need;
pub mod provider;

pub use need::NeedSubmission;
pub use provider::ProviderSubmission;
