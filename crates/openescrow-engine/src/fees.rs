//! Security-deposit and arbitrator-fee arithmetic.
//!
//! All fee math runs on integer minor units with floor-toward-zero
//! division, so results are exact and the fee + net split always sums
//! back to the deposit. The security deposit is issued in the settlement
//! currency whatever the claim's own denomination: the claim amount's
//! minor-unit count is reinterpreted at the settlement currency's
//! precision. Amounts too small to produce a positive deposit and fee are
//! rejected upstream by the engine.

use openescrow_types::{constants, Currency, EscrowError, Money, Result};

/// The security deposit a claimer posts for a claim: one tenth of the
/// claim amount's minor units, re-denominated into `settlement`.
pub fn security_deposit(claim_amount: &Money, settlement: &Currency) -> Result<Money> {
    let units = claim_amount
        .minor_units()
        .ok_or_else(|| EscrowError::InvalidArgument {
            reason: format!("claim amount {claim_amount} out of range"),
        })?;
    Ok(Money::from_minor_units(
        units / constants::SECURITY_DEPOSIT_DIVISOR,
        settlement.clone(),
    ))
}

/// Split a security deposit into `(arbitrator_fee, net_remainder)`.
/// The fee is half the deposit's minor units, floor toward zero; the net
/// is whatever remains, so `fee + net == deposit` exactly.
pub fn split_arbitrator_fee(deposit: &Money) -> Result<(Money, Money)> {
    let units = deposit
        .minor_units()
        .ok_or_else(|| EscrowError::InvalidArgument {
            reason: format!("security deposit {deposit} out of range"),
        })?;
    let fee_units = units / constants::ARBITRATOR_FEE_DIVISOR;
    Ok((
        Money::from_minor_units(fee_units, deposit.currency.clone()),
        Money::from_minor_units(units - fee_units, deposit.currency.clone()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eos() -> Currency {
        Currency::new("EOS", 4)
    }

    fn eos_money(units: i64) -> Money {
        Money::from_minor_units(units, eos())
    }

    #[test]
    fn deposit_is_one_tenth() {
        // 100.0000 EOS claim -> 10.0000 EOS deposit.
        let deposit = security_deposit(&eos_money(1_000_000), &eos()).unwrap();
        assert_eq!(deposit, eos_money(100_000));
    }

    #[test]
    fn deposit_floors_toward_zero() {
        // 19 minor units -> 1, not 2.
        let deposit = security_deposit(&eos_money(19), &eos()).unwrap();
        assert_eq!(deposit.minor_units(), Some(1));

        // 9 minor units -> 0: too small to back a claim.
        let deposit = security_deposit(&eos_money(9), &eos()).unwrap();
        assert!(deposit.is_zero());
    }

    #[test]
    fn deposit_is_redenominated_into_settlement_currency() {
        // A claim in a 2-precision currency: the raw minor-unit count
        // carries over, reinterpreted at the settlement precision.
        let claim_amount = Money::from_minor_units(1_000, Currency::new("USD", 2)); // 10.00 USD
        let deposit = security_deposit(&claim_amount, &eos()).unwrap();
        assert_eq!(deposit, eos_money(100)); // 0.0100 EOS
        assert_eq!(deposit.currency, eos());
    }

    #[test]
    fn fee_split_halves_and_conserves() {
        let deposit = eos_money(100_000); // 10.0000 EOS
        let (fee, net) = split_arbitrator_fee(&deposit).unwrap();
        assert_eq!(fee, eos_money(50_000));
        assert_eq!(net, eos_money(50_000));
        assert_eq!(fee.checked_add(&net).unwrap(), deposit);
    }

    #[test]
    fn fee_split_odd_units_floor_to_fee() {
        // 101 minor units: fee 50, net 51 — the remainder stays in net.
        let deposit = eos_money(101);
        let (fee, net) = split_arbitrator_fee(&deposit).unwrap();
        assert_eq!(fee.minor_units(), Some(50));
        assert_eq!(net.minor_units(), Some(51));
        assert_eq!(fee.checked_add(&net).unwrap(), deposit);
    }

    #[test]
    fn one_unit_deposit_has_zero_fee() {
        let (fee, net) = split_arbitrator_fee(&eos_money(1)).unwrap();
        assert!(fee.is_zero());
        assert_eq!(net.minor_units(), Some(1));
    }

    #[test]
    fn hundred_eos_claim_quantities() {
        // 100.0000 EOS claim: 10.0000 deposit, 5.0000 fee, 5.0000 net.
        let deposit = security_deposit(&eos_money(1_000_000), &eos()).unwrap();
        let (fee, net) = split_arbitrator_fee(&deposit).unwrap();
        assert_eq!(deposit, eos_money(100_000));
        assert_eq!(fee, eos_money(50_000));
        assert_eq!(net, eos_money(50_000));
    }
}
