//! Infrastructure layer implementing the storage contracts defined by the
//! domain layer.
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
