// SPDX-License-Identifier: MPL-2.0
//! Command-line front end.
//!
//! Parses flags, resolves directories, restores the login session and drives
//! one command: register, verify, list restaurants or share a stamped photo.

mod flags;
mod handlers;
pub mod paths;
pub mod session;

pub use flags::{Command, Flags, ScaleInput, ShareArgs, USAGE};
pub use handlers::{print_notifications, register, restaurants, run, share, verify, Context};
pub use session::Session;
