//! Application configuration management.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Calculation defaults injected into the statement builder.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How device-rental invoices tagged to the heating or warm-water pool are treated.
///
/// Statutory treatment is not settled; callers choose explicitly and the choice
/// is echoed into every statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRentalPolicy {
    /// Rental is added on top of the Heizung / Warmwasser pool it is tagged to.
    #[default]
    PoolSurcharge,
    /// Rental stays in the separately-distributed pool only.
    SeparateOnly,
}

/// Calculation defaults for statement generation.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Share of each heating pool allocated by living space (Grundkosten), in percent.
    #[serde(default = "default_living_space_share")]
    pub living_space_share_percent: Decimal,
    /// Share of each heating pool allocated by consumption (Verbrauchskosten), in percent.
    #[serde(default = "default_consumption_dependent")]
    pub consumption_dependent_percent: Decimal,
    /// CO2 emission factor (kg/kWh) used when the energy carrier is not listed.
    #[serde(default = "default_emission_factor")]
    pub default_emission_factor_kg_per_kwh: Decimal,
    /// Reference consumption shown on the energy summary page (kWh/m²/a).
    #[serde(default = "default_national_average")]
    pub national_average_kwh_per_m2: Decimal,
    /// Primary energy factor shown on the energy summary page.
    #[serde(default = "default_primary_energy_factor")]
    pub primary_energy_factor: Decimal,
    /// Treatment of pool-tagged device rental.
    #[serde(default)]
    pub device_rental_policy: DeviceRentalPolicy,
    /// Tenant portal link printed on the cover page.
    #[serde(default = "default_portal_link")]
    pub portal_link: String,
}

fn default_living_space_share() -> Decimal {
    Decimal::new(30, 0)
}

fn default_consumption_dependent() -> Decimal {
    Decimal::new(70, 0)
}

fn default_emission_factor() -> Decimal {
    Decimal::new(210, 3) // 0.210 kg/kWh
}

fn default_national_average() -> Decimal {
    Decimal::new(929, 1) // 92.9 kWh/m²
}

fn default_primary_energy_factor() -> Decimal {
    Decimal::new(13, 1)
}

fn default_portal_link() -> String {
    "https://heidisystems.com/".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            living_space_share_percent: default_living_space_share(),
            consumption_dependent_percent: default_consumption_dependent(),
            default_emission_factor_kg_per_kwh: default_emission_factor(),
            national_average_kwh_per_m2: default_national_average(),
            primary_energy_factor: default_primary_energy_factor(),
            device_rental_policy: DeviceRentalPolicy::default(),
            portal_link: default_portal_link(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "abrechnung=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ABRECHNUNG").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
