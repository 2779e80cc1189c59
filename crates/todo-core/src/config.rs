//! Configuration for the to-do screen.
//!
//! Each policy defaults to the long-standing screen behaviour; the
//! alternatives are opt-in.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::OwnerId;
use crate::ports::{IdGenerator, LengthPlusOne, MaxPlusOne};

pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/todos";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected one of {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How a successful fetch is applied to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Replace everything with the remote list. Tasks added before the fetch
    /// resolved are lost.
    #[default]
    Replace,
    /// Keep tasks added before the fetch resolved ahead of the remote list.
    KeepLocal,
}

/// What CommitEdit stores as the new title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePolicy {
    /// The buffer as typed, surrounding whitespace included.
    #[default]
    Verbatim,
    /// The buffer trimmed, like Add does.
    Trimmed,
}

impl TitlePolicy {
    pub fn apply(self, buffer: &str) -> String {
        match self {
            TitlePolicy::Verbatim => buffer.to_string(),
            TitlePolicy::Trimmed => buffer.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    #[default]
    LengthPlusOne,
    MaxPlusOne,
}

impl IdPolicy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdPolicy::LengthPlusOne => Box::new(LengthPlusOne),
            IdPolicy::MaxPlusOne => Box::new(MaxPlusOne),
        }
    }
}

macro_rules! impl_from_str {
    ($ty:ty, $key:literal, $expected:literal, { $($text:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    _ => Err(ConfigError::Invalid {
                        key: $key,
                        value: s.to_string(),
                        expected: $expected,
                    }),
                }
            }
        }
    };
}

impl_from_str!(LoadPolicy, "TODO_LOAD_POLICY", "replace, keep-local", {
    "replace" => LoadPolicy::Replace,
    "keep-local" => LoadPolicy::KeepLocal,
});

impl_from_str!(TitlePolicy, "TODO_TITLE_POLICY", "verbatim, trimmed", {
    "verbatim" => TitlePolicy::Verbatim,
    "trimmed" => TitlePolicy::Trimmed,
});

impl_from_str!(IdPolicy, "TODO_ID_POLICY", "length-plus-one, max-plus-one", {
    "length-plus-one" => IdPolicy::LengthPlusOne,
    "max-plus-one" => IdPolicy::MaxPlusOne,
});

/// Settings for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote list endpoint (GET, JSON body with a `todos` array)
    pub endpoint: String,
    /// Owner tag stamped on locally created tasks
    pub owner_id: OwnerId,
    pub load_policy: LoadPolicy,
    pub title_policy: TitlePolicy,
    pub id_policy: IdPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            owner_id: OwnerId::new(1),
            load_policy: LoadPolicy::default(),
            title_policy: TitlePolicy::default(),
            id_policy: IdPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// Optional: `TODO_ENDPOINT` (default: https://dummyjson.com/todos)
    /// Optional: `TODO_OWNER_ID` (default: 1)
    /// Optional: `TODO_LOAD_POLICY`, `TODO_TITLE_POLICY`, `TODO_ID_POLICY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("TODO_ENDPOINT").filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(owner) = lookup("TODO_OWNER_ID") {
            let value = owner.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                key: "TODO_OWNER_ID",
                value: owner.clone(),
                expected: "an integer",
            })?;
            config.owner_id = OwnerId::new(value);
        }
        if let Some(policy) = lookup("TODO_LOAD_POLICY") {
            config.load_policy = policy.parse()?;
        }
        if let Some(policy) = lookup("TODO_TITLE_POLICY") {
            config.title_policy = policy.parse()?;
        }
        if let Some(policy) = lookup("TODO_ID_POLICY") {
            config.id_policy = policy.parse()?;
        }

        Ok(config)
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn owner_id(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    pub fn title_policy(mut self, policy: TitlePolicy) -> Self {
        self.title_policy = policy;
        self
    }

    pub fn id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_keep_screen_behaviour() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.owner_id, OwnerId::new(1));
        assert_eq!(config.load_policy, LoadPolicy::Replace);
        assert_eq!(config.title_policy, TitlePolicy::Verbatim);
        assert_eq!(config.id_policy, IdPolicy::LengthPlusOne);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TODO_ENDPOINT", " http://localhost:8080/todos "),
            ("TODO_OWNER_ID", "9"),
            ("TODO_LOAD_POLICY", "keep-local"),
            ("TODO_TITLE_POLICY", "Trimmed"),
            ("TODO_ID_POLICY", "max-plus-one"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/todos");
        assert_eq!(config.owner_id, OwnerId::new(9));
        assert_eq!(config.load_policy, LoadPolicy::KeepLocal);
        assert_eq!(config.title_policy, TitlePolicy::Trimmed);
        assert_eq!(config.id_policy, IdPolicy::MaxPlusOne);
    }

    #[test]
    fn blank_endpoint_keeps_default() {
        let config = AppConfig::from_lookup(lookup(&[("TODO_ENDPOINT", "  ")])).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[rstest]
    #[case::owner("TODO_OWNER_ID", "one")]
    #[case::load("TODO_LOAD_POLICY", "merge")]
    #[case::title("TODO_TITLE_POLICY", "squash")]
    #[case::id("TODO_ID_POLICY", "uuid")]
    fn invalid_values_are_rejected(#[case] key: &str, #[case] value: &str) {
        let err = AppConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: k, value: ref v, .. } if k == key && v == value
        ));
    }

    #[test]
    fn title_policy_applies() {
        assert_eq!(TitlePolicy::Verbatim.apply("  a  "), "  a  ");
        assert_eq!(TitlePolicy::Trimmed.apply("  a  "), "a");
    }

    #[test]
    fn builder_methods_chain() {
        let config = AppConfig::default()
            .endpoint("http://example.test/todos")
            .owner_id(OwnerId::new(3))
            .load_policy(LoadPolicy::KeepLocal)
            .title_policy(TitlePolicy::Trimmed)
            .id_policy(IdPolicy::MaxPlusOne);
        assert_eq!(config.endpoint, "http://example.test/todos");
        assert_eq!(config.owner_id, OwnerId::new(3));
        assert_eq!(config.load_policy, LoadPolicy::KeepLocal);
    }
}
