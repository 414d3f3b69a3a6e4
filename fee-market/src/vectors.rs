use {
    crate::{
        calculator::{fake_exponential, total_request_fee},
        config::{validate_config, FeeConstants, VectorConfig},
        error::FeeError,
    },
    log::debug,
    serde::{Deserialize, Serialize},
};

/// One fixture record: the fee owed for a batch of withdrawal requests at a
/// given excess.
///
/// `base_fee` is the per-request fee and `expected_fee` is
/// `base_fee * number_of_withdrawal_requests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestVector {
    pub number_of_withdrawal_requests: u64,
    pub base_excess: u64,
    pub base_fee: u128,
    pub expected_fee: u128,
}

/// The full fixture: vectors in generation order plus the constants they
/// were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVectorDocument {
    pub vectors: Vec<TestVector>,
    pub constants: FeeConstants,
}

impl TestVectorDocument {
    /// Re-derive every record from `constants` and fail on the first one that
    /// disagrees.
    pub fn verify(&self) -> Result<(), FeeError> {
        let constants = &self.constants;
        for (index, vector) in self.vectors.iter().enumerate() {
            let base_fee = fake_exponential(
                constants.min_withdrawal_request_fee,
                vector.base_excess as u128,
                constants.withdrawal_request_fee_update_fraction,
            )?;
            if vector.base_fee != base_fee {
                return Err(FeeError::VectorMismatch {
                    index,
                    field: "baseFee",
                    expected: base_fee,
                    actual: vector.base_fee,
                });
            }

            let expected_fee = total_request_fee(base_fee, vector.number_of_withdrawal_requests)?;
            if vector.expected_fee != expected_fee {
                return Err(FeeError::VectorMismatch {
                    index,
                    field: "expectedFee",
                    expected: expected_fee,
                    actual: vector.expected_fee,
                });
            }
        }
        Ok(())
    }
}

/// Generate the vectors for `config`.
///
/// Outer loop: excess `2^i` for ascending `i`. Inner loop: request counts in
/// the configured order. Consumers index fixtures by position, so the order
/// is part of the output format.
pub fn generate_vectors(config: &VectorConfig) -> Result<Vec<TestVector>, FeeError> {
    validate_config(config)?;

    let constants = &config.constants;
    let mut vectors = Vec::with_capacity(config.vector_count());

    for base_excess in config.excess_values() {
        let base_fee = fake_exponential(
            constants.min_withdrawal_request_fee,
            base_excess as u128,
            constants.withdrawal_request_fee_update_fraction,
        )?;
        debug!("excess {base_excess}: base fee {base_fee} wei");

        for &number_of_withdrawal_requests in &config.request_counts {
            vectors.push(TestVector {
                number_of_withdrawal_requests,
                base_excess,
                base_fee,
                expected_fee: total_request_fee(base_fee, number_of_withdrawal_requests)?,
            });
        }
    }

    Ok(vectors)
}

/// Generate the complete fixture document for `config`.
pub fn generate_document(config: &VectorConfig) -> Result<TestVectorDocument, FeeError> {
    Ok(TestVectorDocument {
        vectors: generate_vectors(config)?,
        constants: config.constants,
    })
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_field_names() {
        let vector = TestVector {
            number_of_withdrawal_requests: 2,
            base_excess: 64,
            base_fee: 42,
            expected_fee: 84,
        };
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(
            json,
            r#"{"numberOfWithdrawalRequests":2,"baseExcess":64,"baseFee":42,"expectedFee":84}"#
        );
    }

    #[test]
    fn test_document_deserializes() {
        let json = r#"{
            "vectors": [
                {"numberOfWithdrawalRequests": 1, "baseExcess": 1, "baseFee": 1, "expectedFee": 1}
            ],
            "constants": {"MIN_WITHDRAWAL_REQUEST_FEE": 1, "WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION": 17}
        }"#;
        let doc: TestVectorDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.vectors.len(), 1);
        assert_eq!(doc.constants, FeeConstants::default());
        assert!(doc.verify().is_ok());
    }

    #[test]
    fn test_generate_small_config() {
        let config = VectorConfig {
            max_excess_exponent: 1,
            request_counts: vec![3, 1],
            ..VectorConfig::default()
        };
        let vectors = generate_vectors(&config).unwrap();
        let pairs: Vec<(u64, u64)> = vectors
            .iter()
            .map(|v| (v.base_excess, v.number_of_withdrawal_requests))
            .collect();
        assert_eq!(pairs, vec![(1, 3), (1, 1), (2, 3), (2, 1)]);
        assert_eq!(vectors[0].expected_fee, 3);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = VectorConfig {
            request_counts: vec![],
            ..VectorConfig::default()
        };
        assert!(matches!(
            generate_vectors(&config),
            Err(FeeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_verify_detects_bad_expected_fee() {
        let mut doc = generate_document(&VectorConfig::default()).unwrap();
        doc.vectors[10].expected_fee += 1;
        match doc.verify() {
            Err(FeeError::VectorMismatch { index, field, .. }) => {
                assert_eq!(index, 10);
                assert_eq!(field, "expectedFee");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_detects_bad_base_fee() {
        let mut doc = generate_document(&VectorConfig::default()).unwrap();
        doc.vectors[69].base_fee = 0;
        match doc.verify() {
            Err(FeeError::VectorMismatch {
                index,
                field,
                expected,
                actual,
            }) => {
                assert_eq!(index, 69);
                assert_eq!(field, "baseFee");
                assert_eq!(expected, 12_020_397_140_344);
                assert_eq!(actual, 0);
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_uses_document_constants() {
        let config = VectorConfig {
            constants: FeeConstants {
                min_withdrawal_request_fee: 7,
                withdrawal_request_fee_update_fraction: 3,
            },
            max_excess_exponent: 4,
            ..VectorConfig::default()
        };
        let doc = generate_document(&config).unwrap();
        assert!(doc.verify().is_ok());
        assert_eq!(doc.vectors[0].base_fee, fake_exponential(7, 1, 3).unwrap());
    }
}
