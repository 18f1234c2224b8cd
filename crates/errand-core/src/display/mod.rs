//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! every output context goes through the same markdown formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Collection &  │    │   Formatted     │
//! │ (RoutePlan, ..) │───▶│  Result Types   │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers ([`Favorites`], [`VisitingOrder`])
//! - [`results`]: operation results ([`SaveResult`], [`DeleteResult`])
//! - [`datetime`]: timestamp formatting in the local timezone
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Favorites, VisitingOrder};
pub use datetime::LocalDateTime;
pub use results::{DeleteResult, SaveResult};
