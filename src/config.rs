//! Store configuration read from the environment.
//!
//! | variable | required | default |
//! |---|---|---|
//! | `TODOS_TABLE` | yes | |
//! | `INDEX_NAME` | yes | |
//! | `TODOS_CREATE_MODE` | no | `upsert` |
//! | `TODOS_UPDATE_MODE` | no | `unconditional` |
//!
//! `ATTACHMENT_S3_BUCKET` is read by [`crate::attachment::S3AttachmentLinker`].

use crate::{error::ConfigError, write};

use std::{env, str};

/// Table name variable.
pub const TODOS_TABLE: &str = "TODOS_TABLE";

/// Secondary index name variable.
pub const INDEX_NAME: &str = "INDEX_NAME";

/// Create mode variable.
pub const TODOS_CREATE_MODE: &str = "TODOS_CREATE_MODE";

/// Update mode variable.
pub const TODOS_UPDATE_MODE: &str = "TODOS_UPDATE_MODE";

/// What `create` does when a record with the same key already exists.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CreateMode {
    /// Overwrite it.
    #[default]
    Upsert,
    /// Fail with a conditional check error.
    CreateOnly,
}

impl From<CreateMode> for write::common::WriteCondition {
    fn from(create_mode: CreateMode) -> Self {
        match create_mode {
            CreateMode::Upsert => Self::Always,
            CreateMode::CreateOnly => Self::ItemAbsent,
        }
    }
}

impl str::FromStr for CreateMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "upsert" => Ok(Self::Upsert),
            "create-only" => Ok(Self::CreateOnly),
            _ => Err(()),
        }
    }
}

/// What updates do when the targeted record does not exist.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum UpdateMode {
    /// Write the fields anyway, creating a record that holds only the key and those fields.
    #[default]
    Unconditional,
    /// Fail with a conditional check error.
    RequireExisting,
}

impl From<UpdateMode> for write::common::WriteCondition {
    fn from(update_mode: UpdateMode) -> Self {
        match update_mode {
            UpdateMode::Unconditional => Self::Always,
            UpdateMode::RequireExisting => Self::ItemExists,
        }
    }
}

impl str::FromStr for UpdateMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "unconditional" => Ok(Self::Unconditional),
            "require-existing" => Ok(Self::RequireExisting),
            _ => Err(()),
        }
    }
}

/// Everything the store needs to know about its table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StoreConfig {
    /// The todo table.
    pub table_name: String,
    /// Secondary index keyed on `userId` alone.
    pub index_name: String,
    /// Behavior of `create` on an existing key.
    pub create_mode: CreateMode,
    /// Behavior of updates on a missing key.
    pub update_mode: UpdateMode,
}

impl StoreConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            table_name: require(&lookup, TODOS_TABLE)?,
            index_name: require(&lookup, INDEX_NAME)?,
            create_mode: parse_or_default(&lookup, TODOS_CREATE_MODE)?,
            update_mode: parse_or_default(&lookup, TODOS_UPDATE_MODE)?,
        };
        Ok(config)
    }
}

/// Value of a required variable; an empty value counts as missing.
pub(crate) fn require<F>(lookup: &F, variable: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(variable)),
    }
}

fn parse_or_default<F, T>(lookup: &F, variable: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: Default + str::FromStr,
{
    match lookup(variable) {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            variable,
            value,
        }),
        None => Ok(T::default()),
    }
}
