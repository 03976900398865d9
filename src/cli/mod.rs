//! CLI module for dbgui - command-line interface.
//!
//! One command, no subcommands: pick a tool and a service, open the GUI.

pub mod commands;

pub use commands::Cli;
