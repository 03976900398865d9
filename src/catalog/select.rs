//! Service selection
//!
//! Picks exactly one target service from the filtered catalog.

use crate::catalog::Service;
use crate::error::{DbguiError, Result};

/// Select the target service from the filtered candidates
///
/// With no requested name the first candidate wins (catalog order).
/// A requested name must match a candidate's name exactly; the first match
/// wins if the environment reports duplicates. An empty candidate list is
/// `NoServicesFound` regardless of the requested name.
pub fn select_service<'a>(candidates: &'a [Service], requested: Option<&str>) -> Result<&'a Service> {
    let first = candidates.first().ok_or(DbguiError::NoServicesFound)?;

    match requested {
        None => Ok(first),
        Some(name) => candidates
            .iter()
            .find(|candidate| candidate.name == name)
            .ok_or_else(|| DbguiError::UnsupportedService(name.to_string())),
    }
}
