//! Environment inspection collaborator
//!
//! Service discovery belongs to the dev environment itself: `lando info`
//! already knows every running service and its connection metadata. This
//! module shells out to it and deserializes the JSON report; no inspection
//! logic lives here.

use crate::catalog::Service;
use crate::error::{DbguiError, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Inspect the app environment and return the reported service catalog
///
/// Runs `lando info --format json` in `app_dir` (or the current directory)
/// and blocks until it finishes. The report order is preserved; it defines
/// the default candidate downstream.
pub fn inspect(app_dir: Option<&Path>) -> Result<Vec<Service>> {
    let mut command = Command::new("lando");
    command.args(["info", "--format", "json"]);
    if let Some(dir) = app_dir {
        command.current_dir(dir);
    }

    debug!("Inspecting app environment via `lando info --format json`");
    let output = command.output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(DbguiError::EnvironmentInspect(stderr));
    }

    parse_info(&output.stdout)
}

/// Deserialize a `lando info` JSON report into the service catalog
pub fn parse_info(report: &[u8]) -> Result<Vec<Service>> {
    let services: Vec<Service> = serde_json::from_slice(report)?;
    debug!("Environment reported {} service(s)", services.len());
    Ok(services)
}
