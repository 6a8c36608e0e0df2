// SPDX-License-Identifier: MPL-2.0
//! Login session persisted between runs.
//!
//! Stored as CBOR next to other app data, separate from the user-editable
//! `settings.toml`. Holds the phone number registered in the first step and
//! the token returned once the OTP is verified.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

const SESSION_FILE: &str = "session.cbor";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dial_code: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl Session {
    /// Loads from the default data directory.
    ///
    /// Never fails: an unreadable file yields an empty session and a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                return (
                    Self::default(),
                    Some(format!("could not read session file: {err}")),
                )
            }
        };
        match ciborium::from_reader(BufReader::new(file)) {
            Ok(session) => (session, None),
            Err(err) => (
                Self::default(),
                Some(format!("session file is corrupt: {err}")),
            ),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = Self::file_path(base_dir)
            .ok_or_else(|| Error::Session("no data directory available".to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer).map_err(|err| Error::Session(err.to_string()))
    }

    /// Records the phone number an OTP was requested for. Any previous token
    /// belongs to another login and is dropped.
    pub fn begin_login(&mut self, phone: &str, dial_code: &str) {
        self.phone = Some(phone.to_string());
        self.dial_code = Some(dial_code.to_string());
        self.token = None;
    }

    /// Bearer token, if the user has logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        })
    }
}
