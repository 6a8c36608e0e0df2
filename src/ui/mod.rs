// SPDX-License-Identifier: MPL-2.0
//! Screen state, following the "state down, messages up" pattern.
//!
//! - [`detail`] - Restaurant detail screen: logo overlay, scale slider, share
//! - [`notifications`] - Notices shown after an action completes

pub mod detail;
pub mod notifications;
