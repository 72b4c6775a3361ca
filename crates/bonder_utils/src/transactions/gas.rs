//! Gas margin and per-callback configuration.

use bonder_transact::U256;
use snafu::Snafu;
use std::num::NonZeroU64;

const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

pub const GAS_MARGIN_ENV: &str = "BONDER_GAS_MARGIN_BPS";
pub const GAS_LIMIT_OVERRIDE_ENV: &str = "BONDER_GAS_LIMIT_OVERRIDE";

#[derive(Debug, Snafu)]
pub enum CallbackConfigError {
    #[snafu(display("Gas margin must be greater than zero"))]
    ZeroGasMargin,
    #[snafu(display("Invalid value for {name}: {message}"))]
    InvalidValue { name: String, message: String },
}

/// Safety buffer applied on top of a gas estimate, in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasMargin {
    basis_points: u32,
}

impl GasMargin {
    /// +20%
    pub const DEFAULT_BASIS_POINTS: u32 = 2_000;

    pub fn from_basis_points(basis_points: u32) -> Result<Self, CallbackConfigError> {
        if basis_points == 0 {
            return Err(CallbackConfigError::ZeroGasMargin);
        }
        Ok(Self { basis_points })
    }

    pub fn from_percent(percent: u32) -> Result<Self, CallbackConfigError> {
        Self::from_basis_points(percent.saturating_mul(100))
    }

    pub fn basis_points(&self) -> u32 {
        self.basis_points
    }

    /// Returns the gas limit for an estimate, rounded up.
    ///
    /// For any non-zero estimate below `u64::MAX` the result is strictly greater than the
    /// estimate; the result saturates at `u64::MAX`.
    pub fn apply(&self, estimate: u64) -> u64 {
        let scaled = (estimate as u128)
            * (BASIS_POINTS_DENOMINATOR + self.basis_points as u128);
        let limit = scaled.div_ceil(BASIS_POINTS_DENOMINATOR);
        u64::try_from(limit).unwrap_or(u64::MAX)
    }
}

impl Default for GasMargin {
    fn default() -> Self {
        Self {
            basis_points: Self::DEFAULT_BASIS_POINTS,
        }
    }
}

/// Call kind specific knobs of a callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackConfig {
    pub gas_margin: GasMargin,
    /// When set, estimation is skipped and this limit is submitted as is.
    pub gas_limit_override: Option<NonZeroU64>,
    /// Native value attached to the call. Zero for non payable functions.
    pub value: U256,
}

impl CallbackConfig {
    pub fn with_gas_margin(mut self, gas_margin: GasMargin) -> Self {
        self.gas_margin = gas_margin;
        self
    }

    pub fn with_gas_limit_override(mut self, gas_limit: NonZeroU64) -> Self {
        self.gas_limit_override = Some(gas_limit);
        self
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Reads overrides from the environment (and a `.env` file when present).
    pub fn from_env() -> Result<Self, CallbackConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CallbackConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(GAS_MARGIN_ENV) {
            let basis_points =
                raw.trim()
                    .parse::<u32>()
                    .map_err(|e| CallbackConfigError::InvalidValue {
                        name: GAS_MARGIN_ENV.to_string(),
                        message: e.to_string(),
                    })?;
            config.gas_margin = GasMargin::from_basis_points(basis_points)?;
        }

        if let Some(raw) = lookup(GAS_LIMIT_OVERRIDE_ENV) {
            let gas_limit =
                raw.trim()
                    .parse::<NonZeroU64>()
                    .map_err(|e| CallbackConfigError::InvalidValue {
                        name: GAS_LIMIT_OVERRIDE_ENV.to_string(),
                        message: e.to_string(),
                    })?;
            config.gas_limit_override = Some(gas_limit);
        }

        Ok(config)
    }
}
