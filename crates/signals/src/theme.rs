//! The storefront theme as a shared setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shopwindow_core::{DomainError, DomainResult};

use crate::setting::Setting;

/// UI color scheme. Light unless somebody flipped the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other scheme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::validation(format!("unknown theme: {other}"))),
        }
    }
}

impl Setting<Theme> {
    /// Flip between light and dark, notifying watchers, and return the new
    /// scheme.
    pub fn toggle(&self) -> Theme {
        self.update(Theme::toggled)
    }
}
