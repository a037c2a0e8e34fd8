use crate::error::{GreenhouseError, Result};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub sensors: SensorRanges,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of hourly intervals to simulate
    pub intervals: u32,
    /// Fixed RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            intervals: 10,
            seed: None,
        }
    }
}

/// Inclusive bounds for one simulated sensor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GreenhouseError::Config(format!(
                "sensors.{} bounds must be finite numbers",
                name
            )));
        }
        if self.min > self.max {
            return Err(GreenhouseError::Config(format!(
                "sensors.{} min ({}) is greater than max ({})",
                name, self.min, self.max
            )));
        }
        if !(self.max - self.min).is_finite() {
            return Err(GreenhouseError::Config(format!(
                "sensors.{} range is too wide to sample",
                name
            )));
        }
        Ok(())
    }

    /// Whole-number sensors need at least one integer inside the bounds.
    fn validate_whole(&self, name: &str) -> Result<()> {
        if self.min < 0.0 || self.max > f64::from(u32::MAX) {
            return Err(GreenhouseError::Config(format!(
                "sensors.{} must lie between 0 and {}",
                name,
                u32::MAX
            )));
        }
        if self.min.ceil() > self.max.floor() {
            return Err(GreenhouseError::Config(format!(
                "sensors.{} range [{}, {}] contains no whole number",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorRanges {
    /// °C
    pub temperature: SensorRange,
    /// %
    pub humidity: SensorRange,
    /// lux
    pub light: SensorRange,
    /// %
    pub soil_moisture: SensorRange,
    /// ppm
    pub co2: SensorRange,
}

impl Default for SensorRanges {
    fn default() -> Self {
        Self {
            temperature: SensorRange::new(20.0, 45.0),
            humidity: SensorRange::new(15.0, 80.0),
            light: SensorRange::new(100.0, 1200.0),
            soil_moisture: SensorRange::new(20.0, 80.0),
            co2: SensorRange::new(300.0, 1500.0),
        }
    }
}

impl SensorRanges {
    fn validate(&self) -> Result<()> {
        self.temperature.validate("temperature")?;
        self.humidity.validate("humidity")?;
        self.light.validate("light")?;
        self.soil_moisture.validate("soil_moisture")?;
        self.co2.validate("co2")?;

        self.light.validate_whole("light")?;
        self.co2.validate_whole("co2")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl Config {
    /// Load configuration from `config_override`, or from the first standard
    /// location that exists. Falls back to built-in defaults when no file is found.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(GreenhouseError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::info!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| GreenhouseError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml_str(&config_str)
    }

    /// Parse and validate YAML, substituting `${VAR}` placeholders from the environment.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GreenhouseError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.simulation.intervals == 0 {
            return Err(GreenhouseError::Config(
                "simulation.intervals must be at least 1".into(),
            ));
        }
        self.sensors.validate()
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("greenhouse-dss").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/greenhouse-dss/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GreenhouseError::Config("Cannot determine config directory".into()))?
            .join("greenhouse-dss");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Greenhouse simulator setup");
        println!();

        let intervals: u32 = Input::new()
            .with_prompt("  Hourly intervals to simulate")
            .default(10)
            .validate_with(|n: &u32| {
                if *n > 0 {
                    Ok(())
                } else {
                    Err("must be at least 1")
                }
            })
            .interact_text()
            .map_err(|e| GreenhouseError::Config(format!("Input error: {}", e)))?;

        let seed_str: String = Input::new()
            .with_prompt("  RNG seed (blank for a random run)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GreenhouseError::Config(format!("Input error: {}", e)))?;

        let seed = if seed_str.trim().is_empty() {
            None
        } else {
            Some(seed_str.trim().parse::<u64>().map_err(|_| {
                GreenhouseError::Config(format!("invalid seed '{}'", seed_str.trim()))
            })?)
        };

        let formats = [OutputFormat::Table, OutputFormat::Json];
        let labels: Vec<&str> = formats.iter().map(|f| f.as_str()).collect();
        let selected = Select::new()
            .with_prompt("  Report format")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| GreenhouseError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            simulation: SimulationConfig { intervals, seed },
            sensors: SensorRanges::default(),
            report: ReportConfig {
                format: formats[selected],
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;

        // Write with a header comment
        let content = format!(
            "# Greenhouse DSS Configuration\n# Generated by `greenhouse-dss init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| GreenhouseError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
