use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::time::Rounding;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RemapConfig {
  /// Trust that events and breakpoints come in ascending time order.
  pub presorted: bool,
  pub rounding: Rounding,
}

impl Default for RemapConfig {
  fn default() -> RemapConfig {
    RemapConfig {
      presorted: false,
      rounding: Rounding::Nearest,
    }
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub remap: RemapConfig,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      remap: RemapConfig::default(),
    }
  }
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}

#[cfg(test)]
mod test {

  use super::{Config, RemapConfig};
  use crate::time::Rounding;

  #[test]
  pub fn defaults() {
    let config = Config::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.remap.presorted);
    assert_eq!(config.remap.rounding, Rounding::Nearest);
  }

  #[test]
  pub fn remap_section() {
    let config = Config::from_str(
      r#"
      [remap]
      presorted = true
      rounding = "truncate"
      "#,
    )
    .unwrap();
    assert_eq!(
      config.remap,
      RemapConfig {
        presorted: true,
        rounding: Rounding::Truncate,
      }
    );
  }

  #[test]
  pub fn partial_remap_section() {
    let config = Config::from_str("[remap]\nrounding = \"nearest\"\n").unwrap();
    assert!(!config.remap.presorted);
  }

  #[test]
  pub fn invalid_rounding() {
    assert!(Config::from_str("[remap]\nrounding = \"ceil\"\n").is_err());
  }

  #[test]
  pub fn missing_file() {
    assert!(Config::from_file("/nonexistent/hero-score.toml").is_err());
  }
}
