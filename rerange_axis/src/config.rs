// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed key/value configuration for profiles and aspect overrides.
//!
//! A [`ConfigMap`] is what the surrounding UI collects from its settings
//! panels. Profiles are built from it with `from_config`, and multi-zone
//! plots overlay a global map with per-zone maps.

use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use core::fmt;

use tracing::warn;

use crate::scale::ScaleKind;

/// A single configuration value.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number; NaN means "not set".
    Float(f64),
    /// Free text, or the name of an enumerated option.
    Text(Arc<str>),
    /// Axis scale kind.
    Scale(ScaleKind),
}

impl ConfigValue {
    /// Returns the name of the value's type, as used in errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Scale(_) => "scale",
        }
    }
}

/// Types that can be stored in a [`ConfigMap`].
pub trait ConfigType: Sized {
    /// Name of the expected type, as used in errors.
    const TYPE_NAME: &'static str;

    /// Extracts a value, or `None` if `value` has the wrong type.
    fn from_value(value: &ConfigValue) -> Option<Self>;

    /// Converts to a stored value; `None` unsets the key.
    fn into_value(self) -> Option<ConfigValue>;
}

impl ConfigType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_value(self) -> Option<ConfigValue> {
        Some(ConfigValue::Bool(self))
    }
}

impl ConfigType for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn into_value(self) -> Option<ConfigValue> {
        Some(ConfigValue::Int(self))
    }
}

impl ConfigType for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(x) => Some(*x),
            ConfigValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    fn into_value(self) -> Option<ConfigValue> {
        Some(ConfigValue::Float(self))
    }
}

impl ConfigType for ScaleKind {
    const TYPE_NAME: &'static str = "scale";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Scale(kind) => Some(*kind),
            ConfigValue::Text(name) => Self::from_name(name),
            _ => None,
        }
    }

    fn into_value(self) -> Option<ConfigValue> {
        Some(ConfigValue::Scale(self))
    }
}

impl ConfigType for Option<Arc<str>> {
    const TYPE_NAME: &'static str = "text";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Text(text) => Some(Some(text.clone())),
            _ => None,
        }
    }

    fn into_value(self) -> Option<ConfigValue> {
        self.map(ConfigValue::Text)
    }
}

/// A named, typed configuration key with a default value.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigKey<T> {
    name: &'static str,
    default: T,
}

impl<T> ConfigKey<T> {
    /// Creates a key.
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }

    /// Returns the key's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value used when the key is absent.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }
}

/// Error returned by [`ConfigMap::try_get`] when a stored value has the
/// wrong type for the key it is read through.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigError {
    /// Name of the offending key.
    pub key: &'static str,
    /// Type the key expects.
    pub expected: &'static str,
    /// The value actually stored.
    pub found: ConfigValue,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config key `{}` expects a {} value, found {} ({:?})",
            self.key,
            self.expected,
            self.found.type_name(),
            self.found
        )
    }
}

impl core::error::Error for ConfigError {}

/// Ordered map from key names to [`ConfigValue`]s.
///
/// ```
/// use rerange_axis::{ConfigMap, ScaleKind, plane};
///
/// let mut config = ConfigMap::new();
/// config.put(&plane::XLOG, true);
/// assert_eq!(config.get(&plane::XLOG), true);
/// assert_eq!(config.get(&plane::YSCALE), ScaleKind::Linear);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigMap {
    entries: BTreeMap<&'static str, ConfigValue>,
}

impl ConfigMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, or unsets it if the value converts to
    /// nothing.
    pub fn put<T: ConfigType>(&mut self, key: &ConfigKey<T>, value: T) {
        match value.into_value() {
            Some(v) => {
                self.entries.insert(key.name, v);
            }
            None => {
                self.entries.remove(key.name);
            }
        }
    }

    /// Stores a raw value under a key name.
    pub fn set(&mut self, name: &'static str, value: ConfigValue) {
        self.entries.insert(name, value);
    }

    /// Builder form of [`ConfigMap::put`].
    #[must_use]
    pub fn with<T: ConfigType>(mut self, key: &ConfigKey<T>, value: T) -> Self {
        self.put(key, value);
        self
    }

    /// Reads a key, reporting a stored value of the wrong type as an error.
    ///
    /// Absent keys yield the key's default.
    pub fn try_get<T: ConfigType + Clone>(&self, key: &ConfigKey<T>) -> Result<T, ConfigError> {
        match self.entries.get(key.name) {
            None => Ok(key.default.clone()),
            Some(value) => T::from_value(value).ok_or_else(|| ConfigError {
                key: key.name,
                expected: T::TYPE_NAME,
                found: value.clone(),
            }),
        }
    }

    /// Reads a key, falling back to its default if it is absent or holds a
    /// value of the wrong type.
    #[must_use]
    pub fn get<T: ConfigType + Clone>(&self, key: &ConfigKey<T>) -> T {
        self.try_get(key).unwrap_or_else(|err| {
            warn!(%err, "ignoring mistyped config value");
            key.default.clone()
        })
    }

    /// Returns the raw value stored under a key name.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&ConfigValue> {
        self.entries.get(name)
    }

    /// Returns `true` if a value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes and returns the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<ConfigValue> {
        self.entries.remove(name)
    }

    /// Copies every entry of `other` into this map, replacing clashes.
    pub fn overlay(&mut self, other: &Self) {
        for (name, value) in &other.entries {
            self.entries.insert(*name, value.clone());
        }
    }

    /// Iterates over stored key names in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAG: ConfigKey<bool> = ConfigKey::new("flag", false);
    const FACTOR: ConfigKey<f64> = ConfigKey::new("factor", f64::NAN);
    const LABEL: ConfigKey<Option<Arc<str>>> = ConfigKey::new("label", None);

    #[test]
    fn absent_keys_read_as_default() {
        let config = ConfigMap::new();
        assert!(!config.get(&FLAG));
        assert!(config.get(&FACTOR).is_nan());
        assert_eq!(config.get(&LABEL), None);
    }

    #[test]
    fn mistyped_value_is_an_error() {
        let mut config = ConfigMap::new();
        config.set("flag", ConfigValue::Float(1.0));
        let err = config.try_get(&FLAG).unwrap_err();
        assert_eq!(err.key, "flag");
        assert_eq!(err.expected, "bool");
        // Lenient read falls back to the default.
        assert!(!config.get(&FLAG));
    }

    #[test]
    fn ints_widen_to_floats() {
        let mut config = ConfigMap::new();
        config.set("factor", ConfigValue::Int(2));
        assert_eq!(config.try_get(&FACTOR), Ok(2.0));
    }

    #[test]
    fn none_text_unsets() {
        let mut config = ConfigMap::new().with(&LABEL, Some(Arc::from("mag")));
        assert!(config.contains("label"));
        config.put(&LABEL, None);
        assert!(config.is_empty());
    }

    #[test]
    fn overlay_replaces_clashes_and_keeps_the_rest() {
        let mut global = ConfigMap::new().with(&FLAG, true).with(&FACTOR, 1.0);
        let zone = ConfigMap::new().with(&FACTOR, 3.0);
        global.overlay(&zone);
        assert!(global.get(&FLAG));
        assert_eq!(global.get(&FACTOR), 3.0);
        assert_eq!(global.keys().collect::<alloc::vec::Vec<_>>(), ["factor", "flag"]);
    }

    #[test]
    fn error_message_names_the_key() {
        let err = ConfigError {
            key: "xlog",
            expected: "bool",
            found: ConfigValue::Int(1),
        };
        let text = alloc::format!("{err}");
        assert!(text.contains("xlog"), "message should name the key: {text}");
        assert!(text.contains("int"), "message should name the found type: {text}");
    }
}
