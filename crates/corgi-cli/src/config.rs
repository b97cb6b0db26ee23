//! Runtime configuration read from the environment.

use std::str::FromStr;

use corgi_hexgrid::{Layout, Point};

use crate::error::{CliError, Result};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One value per line, human readable
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Hex circumradius in pixels
    pub hex_size: f64,
    /// Pixel x of the origin hex's center
    pub offset_x: f64,
    /// Pixel y of the origin hex's center
    pub offset_y: f64,
    /// Output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            hex_size: 32.0,
            offset_x: 0.0,
            offset_y: 0.0,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// - `CORGI_HEX_SIZE` (default 32)
    /// - `CORGI_OFFSET_X`, `CORGI_OFFSET_Y` (default 0)
    /// - `CORGI_OUTPUT`: `text` or `json` (default text)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`CliConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            hex_size: parse_var(&lookup, "CORGI_HEX_SIZE", defaults.hex_size)?,
            offset_x: parse_var(&lookup, "CORGI_OFFSET_X", defaults.offset_x)?,
            offset_y: parse_var(&lookup, "CORGI_OFFSET_Y", defaults.offset_y)?,
            output: parse_var(&lookup, "CORGI_OUTPUT", defaults.output)?,
        })
    }

    /// Pixel layout described by this config. Fails on a non-positive or
    /// non-finite hex size.
    pub fn layout(&self) -> Result<Layout> {
        Ok(Layout::try_new(self.hex_size, Point::new(self.offset_x, self.offset_y))?)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| CliError::Config { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.layout().unwrap(), Layout::new(32.0, Point::new(0.0, 0.0)));
    }

    #[test]
    fn reads_all_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("CORGI_HEX_SIZE", "48.5"),
            ("CORGI_OFFSET_X", "400"),
            ("CORGI_OFFSET_Y", " -12.5 "),
            ("CORGI_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.hex_size, 48.5);
        assert_eq!(config.offset_x, 400.0);
        assert_eq!(config.offset_y, -12.5);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = CliConfig::from_lookup(lookup(&[("CORGI_HEX_SIZE", "big")])).unwrap_err();
        assert!(matches!(err, CliError::Config { var: "CORGI_HEX_SIZE", .. }));

        let err = CliConfig::from_lookup(lookup(&[("CORGI_OUTPUT", "yaml")])).unwrap_err();
        assert!(matches!(err, CliError::Config { var: "CORGI_OUTPUT", .. }));
    }

    #[test]
    fn layout_rejects_zero_size() {
        let config = CliConfig::from_lookup(lookup(&[("CORGI_HEX_SIZE", "0")])).unwrap();
        assert!(matches!(
            config.layout(),
            Err(CliError::Grid(corgi_hexgrid::Error::InvalidHexSize(_)))
        ));
    }
}
