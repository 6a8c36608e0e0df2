// SPDX-License-Identifier: MPL-2.0
//! Backend API: phone/OTP login and the restaurant listing.

pub mod auth;
pub mod client;
pub mod restaurant;

pub use auth::{OtpCode, PhoneNumber};
pub use client::Client;
pub use restaurant::Restaurant;
