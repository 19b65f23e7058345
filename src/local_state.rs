// ABOUTME: Local state file for the command-line client
// ABOUTME: Persists the last calculator result and assistant conversation between CLI runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Local State
//!
//! The CLI has no server connection. Whatever it needs to remember between
//! invocations goes through [`LocalStateStore::load`] and
//! [`LocalStateStore::save`]; nothing else touches the file.

use crate::constants::{defaults, limits};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use pulse_core::models::{ChatMessage, MetricResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything the CLI remembers between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalState {
    /// Most recent calculator result
    #[serde(default)]
    pub last_metrics: Option<MetricResult>,
    /// Assistant conversation, oldest first
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    /// Last save time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LocalState {
    /// Append a message, dropping the oldest ones beyond the history limit
    pub fn push_message(&mut self, message: ChatMessage) {
        self.chat_history.push(message);
        let max = usize::try_from(limits::CHAT_HISTORY_LIMIT).unwrap_or(usize::MAX);
        if self.chat_history.len() > max {
            let excess = self.chat_history.len() - max;
            self.chat_history.drain(..excess);
        }
    }
}

/// JSON file holding a [`LocalState`]
#[derive(Debug, Clone)]
pub struct LocalStateStore {
    path: PathBuf,
}

impl LocalStateStore {
    /// Store backed by `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<data dir>/pulse/state.json` for the current user
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` if the platform has no user data directory
    pub fn default_path() -> AppResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| {
                dir.join(defaults::APP_DIR_NAME)
                    .join(defaults::LOCAL_STATE_FILE)
            })
            .ok_or_else(|| AppError::config("Could not determine the user data directory"))
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state, or an empty one if the file does not exist yet
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read or is not valid state JSON
    pub fn load(&self) -> AppResult<LocalState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No local state yet");
                return Ok(LocalState::default());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            AppError::storage(format!("Corrupt state file {}: {e}", self.path.display()))
        })
    }

    /// Write the state, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the directory or file cannot be written
    pub fn save(&self, state: &LocalState) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let mut state = state.clone();
        state.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&state)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), messages = state.chat_history.len(), "Local state saved");
        Ok(())
    }

    /// Delete the state file if present
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file exists but cannot be removed
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
