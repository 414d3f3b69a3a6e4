use {
    crate::error::FeeError,
    serde::{Deserialize, Serialize},
};

/// Minimum withdrawal request fee in wei.
/// See <https://eips.ethereum.org/EIPS/eip-7002#configuration>.
pub const MIN_WITHDRAWAL_REQUEST_FEE: u128 = 1;

/// Controls how quickly the fee grows with the excess request count.
pub const WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION: u128 = 17;

/// Where the generator writes the fixture, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "tests/fixtures/eip7002_testvectors.json";

/// Highest `i` for which `2^i` is used as an excess value.
pub const DEFAULT_MAX_EXCESS_EXPONENT: u32 = 9;

/// Request counts paired with every excess value, in output order.
pub const DEFAULT_REQUEST_COUNTS: [u64; 7] = [1, 2, 8, 16, 32, 64, 100];

/// Fee constants embedded in the fixture so consumers can check which
/// parameters the vectors were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConstants {
    #[serde(rename = "MIN_WITHDRAWAL_REQUEST_FEE")]
    pub min_withdrawal_request_fee: u128,

    #[serde(rename = "WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION")]
    pub withdrawal_request_fee_update_fraction: u128,
}

impl Default for FeeConstants {
    fn default() -> Self {
        Self {
            min_withdrawal_request_fee: MIN_WITHDRAWAL_REQUEST_FEE,
            withdrawal_request_fee_update_fraction: WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION,
        }
    }
}

/// Parameters for a test vector run.
///
/// Excess values are `2^0 ..= 2^max_excess_exponent`; each one is paired with
/// every entry of `request_counts` in the listed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorConfig {
    pub constants: FeeConstants,
    pub max_excess_exponent: u32,
    pub request_counts: Vec<u64>,
}

impl VectorConfig {
    /// Excess values in generation order.
    pub fn excess_values(&self) -> impl Iterator<Item = u64> + use<> {
        (0..=self.max_excess_exponent).map(|i| 2u64.saturating_pow(i))
    }

    /// Number of vectors a run with this config produces.
    pub fn vector_count(&self) -> usize {
        (self.max_excess_exponent as usize)
            .saturating_add(1)
            .saturating_mul(self.request_counts.len())
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            constants: FeeConstants::default(),
            max_excess_exponent: DEFAULT_MAX_EXCESS_EXPONENT,
            request_counts: DEFAULT_REQUEST_COUNTS.to_vec(),
        }
    }
}

/// Validate that a `VectorConfig` can be used for generation.
pub fn validate_config(config: &VectorConfig) -> Result<(), FeeError> {
    if config.constants.withdrawal_request_fee_update_fraction == 0 {
        return Err(FeeError::InvalidConfig {
            reason: "withdrawal_request_fee_update_fraction must be > 0".to_string(),
        });
    }
    if config.max_excess_exponent >= u64::BITS {
        return Err(FeeError::InvalidConfig {
            reason: format!(
                "max_excess_exponent ({}) must be below {}",
                config.max_excess_exponent,
                u64::BITS
            ),
        });
    }
    if config.request_counts.is_empty() {
        return Err(FeeError::InvalidConfig {
            reason: "request_counts must not be empty".to_string(),
        });
    }
    if config.request_counts.contains(&0) {
        return Err(FeeError::InvalidConfig {
            reason: "request_counts must all be >= 1".to_string(),
        });
    }
    Ok(())
}
