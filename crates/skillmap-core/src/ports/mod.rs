//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod gateway;

pub use gateway::{AuthGateway, AuthPayload};
