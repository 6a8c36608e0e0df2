// SPDX-License-Identifier: MPL-2.0
//! `logo_stamp` is the core of a restaurant photo client.
//!
//! It places a brand logo over a restaurant photo, lets the user resize the
//! logo with a vertical slider and move it by dragging, then renders the
//! result to a PNG and hands it to a share, download or save backend. The
//! backend API client and login session live alongside.
//!
//! # Layout
//!
//! - [`domain`]: overlay geometry value types, free of I/O
//! - [`ui`]: detail-screen state machine and notifications
//! - [`media`]: image loading, compositing and delivery
//! - [`api`]: restaurant backend client
//! - [`app`]: command-line flows, paths and session persistence
//! - [`config`]: user settings

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
