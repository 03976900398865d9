//! Service catalog for dbgui
//!
//! This module contains the running-service model and the decision logic
//! that narrows the catalog down to one target:
//! - Service: immutable snapshot of a running service as reported by the
//!   environment, with connection metadata
//! - filter_db_services: keep only database services with a dialable port
//! - select_service: pick exactly one target service, or fail

pub mod select;
pub mod service;

pub use select::select_service;
pub use service::{Credentials, DB_TYPES, Endpoint, Port, Service, filter_db_services};
