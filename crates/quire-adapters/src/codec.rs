//! Serde-backed configuration codec.
//!
//! One adapter covers every [`Format`]: `serde_json` (pretty), `serde_yaml`
//! and `toml` (pretty). The field names come from the serde derives on
//! `ProjectConfig`, so all three formats share one shape.

use quire_core::{
    application::{ApplicationError, ports::ConfigCodec},
    domain::{Format, ProjectConfig},
    error::QuireResult,
};
use tracing::trace;

/// Encodes and decodes configurations with the serde ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeCodec;

impl SerdeCodec {
    pub fn new() -> Self {
        Self
    }
}

fn encode_error(format: Format, reason: impl ToString) -> ApplicationError {
    ApplicationError::Encode {
        format,
        reason: reason.to_string(),
    }
}

fn decode_error(format: Format, reason: impl ToString) -> ApplicationError {
    ApplicationError::Decode {
        format,
        reason: reason.to_string(),
    }
}

impl ConfigCodec for SerdeCodec {
    fn encode(&self, config: &ProjectConfig, format: Format) -> QuireResult<Vec<u8>> {
        let text = match format {
            Format::Json => {
                let mut text =
                    serde_json::to_string_pretty(config).map_err(|e| encode_error(format, e))?;
                text.push('\n');
                text
            }
            Format::Yaml => serde_yaml::to_string(config).map_err(|e| encode_error(format, e))?,
            Format::Toml => toml::to_string_pretty(config).map_err(|e| encode_error(format, e))?,
        };

        trace!(%format, bytes = text.len(), "configuration encoded");
        Ok(text.into_bytes())
    }

    fn decode(&self, bytes: &[u8], format: Format) -> QuireResult<ProjectConfig> {
        let config: ProjectConfig = match format {
            Format::Json => serde_json::from_slice(bytes).map_err(|e| decode_error(format, e))?,
            Format::Yaml => serde_yaml::from_slice(bytes).map_err(|e| decode_error(format, e))?,
            Format::Toml => {
                let text = std::str::from_utf8(bytes).map_err(|e| decode_error(format, e))?;
                toml::from_str(text).map_err(|e| decode_error(format, e))?
            }
        };
        Ok(config)
    }
}
