//! Store configuration.
//!
//! # Invariants
//! - `slot_key` is never empty.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "employee_management_app_data";

/// Record store configuration resolved by the composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Durable slot key holding the serialized collection.
    pub slot_key: String,
    /// Populate the seed set when the slot is absent, empty or corrupt.
    pub seed_when_empty: bool,
}

impl StoreConfig {
    /// Creates a config for a custom slot key.
    pub fn new(slot_key: impl Into<String>) -> Result<Self, ConfigError> {
        let slot_key = slot_key.into();
        let trimmed = slot_key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptySlotKey);
        }
        Ok(Self {
            slot_key: trimmed.to_string(),
            seed_when_empty: true,
        })
    }

    /// Disables seeding, so an empty slot yields an empty collection.
    pub fn without_seed(mut self) -> Self {
        self.seed_when_empty = false;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            seed_when_empty: true,
        }
    }
}

/// Errors raised while building configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptySlotKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlotKey => write!(f, "slot key cannot be empty"),
        }
    }
}

impl Error for ConfigError {}
