//! Parser voor JSON-configuratiebestanden met displayopstellingen.
//!
//! Een document heeft de vorm `{ "version": "1.0", "timestamp": "...",
//! "displays": [...] }`. Alleen `displays` is verplicht; oudere bestanden
//! zonder versie of tijdstempel worden gewoon ingelezen.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::display::{Display, DisplayError};

/// Versie die bij het wegschrijven in elk document komt.
pub const CONFIG_VERSION: &str = "1.0";

/// Result type voor het verwerken van configuratiedocumenten.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Beschrijft fouten bij het lezen of controleren van een configuratie.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Het document is geen geldige JSON of mist de `displays`-lijst.
    #[error("JSON parsefout: {0}")]
    Json(#[from] serde_json::Error),
    /// Een display in het document beschrijft geen geldig scherm.
    #[error("ongeldige display op index {index}: {source}")]
    InvalidDisplay {
        index: usize,
        #[source]
        source: DisplayError,
    },
}

/// Een volledige opstelling zoals die op schijf staat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    pub displays: Vec<Display>,
}

fn default_version() -> String {
    CONFIG_VERSION.to_owned()
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CalibrationConfig {
    /// Nieuw document met de huidige tijd als tijdstempel.
    #[must_use]
    pub fn new(displays: Vec<Display>) -> Self {
        Self {
            version: default_version(),
            timestamp: Some(OffsetDateTime::now_utc()),
            displays,
        }
    }

    /// Zelfde als [`parse_str`].
    pub fn parse_str(input: &str) -> ConfigResult<Self> {
        parse_str(input)
    }

    /// JSON met twee spaties inspringing.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Controleert elke display en meldt de eerste ongeldige met zijn index.
    pub fn validate_displays(&self) -> ConfigResult<()> {
        for (index, display) in self.displays.iter().enumerate() {
            display
                .validate()
                .map_err(|source| ConfigError::InvalidDisplay { index, source })?;
        }
        Ok(())
    }

    /// Bestandsnaam voor een download, bijvoorbeeld
    /// `display-config-2025-03-01T12-30-05.json`.
    #[must_use]
    pub fn suggested_file_name(&self) -> String {
        let stamp = self
            .timestamp
            .and_then(|timestamp| {
                timestamp
                    .format(format_description!(
                        "[year]-[month]-[day]T[hour]-[minute]-[second]"
                    ))
                    .ok()
            })
            .unwrap_or_else(|| "unsaved".to_owned());
        format!("display-config-{stamp}.json")
    }
}

/// Leest een configuratiedocument.
///
/// Displays worden hier niet gevalideerd; roep daarvoor
/// [`CalibrationConfig::validate_displays`] aan.
pub fn parse_str(input: &str) -> ConfigResult<CalibrationConfig> {
    log::debug!("Start parsing configuratiedocument ({} bytes)", input.len());
    let config: CalibrationConfig = serde_json::from_str(input)?;
    if config.version != CONFIG_VERSION {
        log::warn!(
            "onbekende configuratieversie {:?}, verwacht {CONFIG_VERSION}",
            config.version
        );
    }
    log::debug!("Found {} displays", config.displays.len());
    Ok(config)
}
