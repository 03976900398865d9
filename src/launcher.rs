//! Process-execution collaborator
//!
//! Hands a finished `LaunchCommand` to the OS. The launched GUI tool owns
//! its own lifetime; only the launch itself is checked.

use crate::error::{DbguiError, Result};
use crate::tools::LaunchCommand;
use log::info;
use std::process::Command;

/// Execute a launch command, failing on spawn errors or a non-zero exit
pub fn launch(command: &LaunchCommand) -> Result<()> {
    info!("Launching: {}", command);

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .map_err(|e| DbguiError::ProcessLaunchFailed(e.to_string()))?;

    if !status.success() {
        return Err(DbguiError::ProcessLaunchFailed(match status.code() {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }));
    }

    Ok(())
}
