//! Fault taxonomy for remote API calls.
//!
//! Every unsuccessful remote call is an [`ApiFault`]. Faults fall into one of
//! two [`FaultCategory`] values:
//!
//! | Category | Meaning | Examples |
//! |----------|---------|----------|
//! | Network | no response was obtained | connection refused, DNS, timeout, interrupted body |
//! | Application | anything else | HTTP 4xx/5xx, undecodable body, invalid URL |
//!
//! The repository layer turns faults into [`crate::result::ApiResult`]
//! variants; faults never cross that boundary.

mod category;
mod fault;

pub use category::FaultCategory;
pub use fault::ApiFault;
