use {
    crate::{
        config::{MIN_WITHDRAWAL_REQUEST_FEE, WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION},
        error::FeeError,
    },
    num_bigint::BigUint,
    num_traits::{One, Zero},
};

/// Approximate `factor * e^(numerator / denominator)` using integer math only.
///
/// # Formula
///
/// ```text
/// i = 1
/// output = 0
/// numerator_accum = factor * denominator
/// while numerator_accum > 0:
///     output += numerator_accum
///     numerator_accum = numerator_accum * numerator / (denominator * i)
///     i += 1
/// return output / denominator
/// ```
///
/// Every division floors. The result must match the consensus rule
/// bit-for-bit, so the series is summed until the accumulator reaches zero
/// rather than to a fixed number of terms.
///
/// Intermediate values can be much larger than the result; any overflow of
/// `u128` is reported as [`FeeError::Overflow`]. Use
/// [`fake_exponential_big`] for inputs outside the `u128` range.
///
/// Callers must pass a non-zero `denominator`. A zero denominator yields
/// [`FeeError::ZeroDenominator`].
pub fn fake_exponential(factor: u128, numerator: u128, denominator: u128) -> Result<u128, FeeError> {
    if denominator == 0 {
        return Err(FeeError::ZeroDenominator);
    }

    let mut i: u128 = 1;
    let mut output: u128 = 0;
    let mut numerator_accum = factor.checked_mul(denominator).ok_or(FeeError::Overflow)?;

    while numerator_accum > 0 {
        output = output
            .checked_add(numerator_accum)
            .ok_or(FeeError::Overflow)?;
        let step = denominator.checked_mul(i).ok_or(FeeError::Overflow)?;
        numerator_accum = numerator_accum
            .checked_mul(numerator)
            .ok_or(FeeError::Overflow)?
            .checked_div(step)
            .ok_or(FeeError::ZeroDenominator)?;
        i = i.checked_add(1).ok_or(FeeError::Overflow)?;
    }

    output
        .checked_div(denominator)
        .ok_or(FeeError::ZeroDenominator)
}

/// Arbitrary-precision variant of [`fake_exponential`]. Never overflows.
#[allow(clippy::arithmetic_side_effects)]
pub fn fake_exponential_big(
    factor: &BigUint,
    numerator: &BigUint,
    denominator: &BigUint,
) -> Result<BigUint, FeeError> {
    if denominator.is_zero() {
        return Err(FeeError::ZeroDenominator);
    }

    let mut i = BigUint::one();
    let mut output = BigUint::zero();
    let mut numerator_accum = factor * denominator;

    while !numerator_accum.is_zero() {
        output += &numerator_accum;
        numerator_accum = (&numerator_accum * numerator) / (denominator * &i);
        i += 1u32;
    }

    Ok(output / denominator)
}

/// Per-request withdrawal fee for a given excess request count (EIP-7002).
///
/// See <https://eips.ethereum.org/EIPS/eip-7002#fee-calculation>.
pub fn withdrawal_request_fee(excess: u64) -> Result<u128, FeeError> {
    fake_exponential(
        MIN_WITHDRAWAL_REQUEST_FEE,
        excess as u128,
        WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION,
    )
}

/// Fee owed for `request_count` requests at `base_fee` each. No rounding.
pub fn total_request_fee(base_fee: u128, request_count: u64) -> Result<u128, FeeError> {
    base_fee
        .checked_mul(request_count as u128)
        .ok_or(FeeError::Overflow)
}
