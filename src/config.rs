// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime settings read from the environment.
//!
//! Command-line flags are applied on top by the binary.

use std::{env, error::Error, fmt};

use crate::deck::DEFAULT_SWIPE_THRESHOLD;
use crate::format::NumberLocale;

pub const SWIPE_THRESHOLD_ENV: &str = "RECAP_SWIPE_THRESHOLD";
pub const LOCALE_ENV: &str = "RECAP_LOCALE";
const SYSTEM_LOCALE_ENVS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub swipe_threshold: f64,
    pub locale: NumberLocale,
}

impl Default for Settings {
    fn default() -> Self {
        Self { swipe_threshold: DEFAULT_SWIPE_THRESHOLD, locale: NumberLocale::ENGLISH }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(raw) = read_var(&lookup, SWIPE_THRESHOLD_ENV)? {
            settings.swipe_threshold = parse_swipe_threshold(&raw)
                .map_err(|error| ConfigError::invalid(SWIPE_THRESHOLD_ENV, &raw, &error))?;
        }

        for name in std::iter::once(LOCALE_ENV).chain(SYSTEM_LOCALE_ENVS) {
            if let Some(tag) = read_var(&lookup, name)? {
                settings.locale = NumberLocale::from_tag(&tag);
                break;
            }
        }

        Ok(settings)
    }
}

/// Parses a swipe threshold in terminal rows. Must be finite and not negative.
pub fn parse_swipe_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|_| format!("not a number: {raw}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("expected a non-negative number of rows, got {value}"));
    }
    Ok(value)
}

/// Reads one variable; unset and blank are both `None`.
pub(crate) fn read_var(
    lookup: &impl Fn(&str) -> Result<String, env::VarError>,
    name: &str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
            name: name.to_owned(),
            value: "<non-unicode>".to_owned(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, value: &str, error: &str) -> Self {
        Self::InvalidEnv { name: name.to_owned(), value: format!("{value} ({error})") }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ConfigError {}
