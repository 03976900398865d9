//! GUI tool launch commands
//!
//! One builder per supported tool:
//! - tableplus: URL-style connect string handed to `open`
//! - dbeaver: structured driver descriptor, platform-specific invocation
//!
//! `ToolId` is a closed enum; `build_launch_command` matches exhaustively,
//! so adding a tool means adding one variant plus one builder module and
//! the compiler points at every site that needs updating.

pub mod dbeaver;
pub mod tableplus;

use crate::catalog::Service;
use crate::error::{DbguiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported GUI tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    TablePlus,
    Dbeaver,
}

impl ToolId {
    /// Identifier as used on the command line and in `.lando.yml`
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::TablePlus => "tableplus",
            ToolId::Dbeaver => "dbeaver",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = DbguiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tableplus" => Ok(ToolId::TablePlus),
            "dbeaver" => Ok(ToolId::Dbeaver),
            other => Err(DbguiError::UnsupportedTool(other.to_string())),
        }
    }
}

/// A finished tool invocation: program plus argument vector
///
/// Built as a real argv rather than a shell string, so credential
/// characters never need shell quoting. Only the process-execution
/// collaborator interprets it; `Display` renders a shell-quoted form for
/// stdout and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Create a new command for the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        write!(f, "{}", shell_words::join(words))
    }
}

/// Resolve the host to dial for a service
///
/// Starts from the reported external host, rewrites the bind-all address
/// "0.0.0.0" to "127.0.0.1" (never dialable from the host machine), and
/// lets a present override replace the result unconditionally.
pub fn resolve_host(service: &Service, ip_override: Option<&str>) -> String {
    if let Some(ip) = ip_override {
        return ip.to_string();
    }

    let host = service
        .external_connection
        .as_ref()
        .map(|endpoint| endpoint.host.as_str())
        .unwrap_or_default();

    if host == "0.0.0.0" {
        "127.0.0.1".to_string()
    } else {
        host.to_string()
    }
}

/// Build the launch command for a tool connected to a service
///
/// Pure function of its inputs; no I/O. Fails with `UnsupportedService`
/// only if handed a service without a numeric external port, which the
/// catalog filter rules out upstream.
pub fn build_launch_command(
    service: &Service,
    tool: ToolId,
    ip_override: Option<&str>,
) -> Result<LaunchCommand> {
    let host = resolve_host(service, ip_override);

    match tool {
        ToolId::TablePlus => tableplus::build(service, &host),
        ToolId::Dbeaver => dbeaver::build(service, &host),
    }
}
