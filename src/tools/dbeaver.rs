//! DBeaver launch command
//!
//! DBeaver takes a pipe-delimited connection descriptor via `-con`. On
//! macOS the app bundle is started through `open -a`; everywhere else the
//! `dbeaver` binary is invoked directly.

use crate::catalog::Service;
use crate::error::{DbguiError, Result};
use crate::tools::LaunchCommand;

/// Build the DBeaver invocation for a service on the current platform
pub fn build(service: &Service, host: &str) -> Result<LaunchCommand> {
    build_for_os(service, host, std::env::consts::OS)
}

fn build_for_os(service: &Service, host: &str, os: &str) -> Result<LaunchCommand> {
    let descriptor = connection_descriptor(service, host)?;

    let command = match os {
        "macos" => LaunchCommand::new("open")
            .arg("-a")
            .arg("DBeaver.app")
            .arg("--args")
            .arg("-con")
            .arg(descriptor)
            .arg("-bringToFront"),
        // Windows and the unixes share the same command-line form
        _ => LaunchCommand::new("dbeaver")
            .arg("-con")
            .arg(descriptor)
            .arg("-bringToFront"),
    };

    Ok(command)
}

/// The `-con` descriptor: an ad-hoc connection that is neither persisted
/// nor reused (`create=true|save=false`)
fn connection_descriptor(service: &Service, host: &str) -> Result<String> {
    let port = service
        .dialable_port()
        .ok_or_else(|| DbguiError::UnsupportedService(service.name.clone()))?;

    Ok(format!(
        "driver={}|host={}|port={}|database={}|user={}|password={}|create=true|save=false",
        driver_for(service),
        host,
        port,
        service.creds.database,
        service.creds.user,
        service.creds.password,
    ))
}

/// Pick the DBeaver driver id for a service
///
/// DBeaver ships separate mysql drivers per major version; everything else
/// maps straight from the service type.
fn driver_for(service: &Service) -> String {
    if service.kind == "mysql" {
        if service.version.starts_with('8') {
            "mysql8".to_string()
        } else {
            "mysql5".to_string()
        }
    } else {
        service.kind.clone()
    }
}
