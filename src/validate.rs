// Wallet client for the Aleo coffee shop workshop
//
// SPDX-License-Identifier: Apache-2.0
//
// Designed in 2019-2025 by Dr Maxim Orlovsky <orlovsky@lnp-bp.org>
// Written in 2024-2025 by Dr Maxim Orlovsky <orlovsky@lnp-bp.org>
//
// Copyright (C) 2019-2024 LNP/BP Standards Association, Switzerland.
// Copyright (C) 2024-2025 LNP/BP Laboratories,
//                         Institute for Distributed and Cognitive Systems (InDCS), Switzerland.
// Copyright (C) 2025 RGB Consortium, Switzerland.
// Copyright (C) 2019-2025 Dr Maxim Orlovsky.
// All rights under the above copyrights are reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! Checks of raw form input.
//!
//! Amounts are understood the way a browser number input understands them: surrounding
//! whitespace is ignored, an empty field is zero, fractions and exponents are fine. Only finite
//! values strictly above zero pass. The integer width a contract parameter declares is *not*
//! enforced unless [`AmountPolicy::Strict`] is selected; by default out-of-range values are
//! forwarded and rejected by the contract execution itself.

use core::fmt::{self, Display, Formatter};

use serde_crate::{Deserialize, Serialize};

use crate::{IntWidth, ValidationError};

/// How strictly amounts are checked against the declared integer width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display)]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_crate", rename_all = "lowercase")]
#[display(lowercase)]
pub enum AmountPolicy {
    /// Only positivity is checked.
    #[default]
    Permissive,

    /// The amount must also be an integer fitting the declared width.
    Strict,
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Positive finite amount entered by a user.
///
/// Plain decimal integers keep their exact value; fractions and exponent forms are kept as
/// floating point numbers.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Amount {
    Integer(u128),
    Decimal(f64),
}

impl Amount {
    /// Exact integer value of the amount, if it has one.
    pub fn as_integer(self) -> Option<u128> {
        match self {
            Amount::Integer(value) => Some(value),
            Amount::Decimal(value) if value.fract() == 0.0 && value <= MAX_EXACT_FLOAT => {
                Some(value as u128)
            }
            Amount::Decimal(_) => None,
        }
    }

    pub fn is_integral(self) -> bool { self.as_integer().is_some() }

    /// Whether the amount is an integer representable by the given width.
    pub fn fits(self, width: IntWidth) -> bool {
        self.as_integer().is_some_and(|value| value <= width.max())
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(value) => Display::fmt(value, f),
            Amount::Decimal(value) => Display::fmt(value, f),
        }
    }
}

/// Parses text consisting of decimal digits only, with an optional leading `+`.
fn parse_integer(text: &str) -> Option<u128> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn parse_amount(
    raw: &str,
    width: IntWidth,
    policy: AmountPolicy,
) -> Result<Amount, ValidationError> {
    let trimmed = raw.trim();
    let amount = if let Some(value) = parse_integer(trimmed) {
        Amount::Integer(value)
    } else if trimmed.is_empty() {
        Amount::Integer(0)
    } else {
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount(raw.to_owned()))?;
        if !value.is_finite() {
            return Err(ValidationError::InvalidAmount(raw.to_owned()));
        }
        Amount::Decimal(value)
    };
    let positive = match amount {
        Amount::Integer(value) => value > 0,
        Amount::Decimal(value) => value > 0.0,
    };
    if !positive {
        return Err(ValidationError::InvalidAmount(raw.to_owned()));
    }
    if policy == AmountPolicy::Strict && !amount.fits(width) {
        return Err(ValidationError::AmountOutOfRange(raw.to_owned(), width));
    }
    Ok(amount)
}

/// Requires a record field to contain something besides whitespace.
///
/// Returns the text untouched: trimming is used for the check only.
pub fn require_record<'a>(raw: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyRecord(field));
    }
    Ok(raw)
}

pub fn require_address(raw: &str) -> Result<&str, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyAddress);
    }
    Ok(raw)
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("3 coffees")]
    #[case("NaN")]
    #[case("inf")]
    #[case("-0.5")]
    fn rejects_non_positive(#[case] raw: &str) {
        assert_eq!(
            parse_amount(raw, IntWidth::U8, AmountPolicy::Permissive),
            Err(ValidationError::InvalidAmount(raw.to_owned()))
        );
    }

    #[rstest]
    #[case("3", "3")]
    #[case(" 7 ", "7")]
    #[case("2.5", "2.5")]
    #[case("1e2", "100")]
    #[case("+4", "4")]
    fn accepts_positive(#[case] raw: &str, #[case] rendered: &str) {
        let amount = parse_amount(raw, IntWidth::U8, AmountPolicy::Permissive).unwrap();
        assert_eq!(amount.to_string(), rendered);
    }

    #[test]
    fn permissive_ignores_width() {
        let amount = parse_amount("1000", IntWidth::U8, AmountPolicy::Permissive).unwrap();
        assert_eq!(amount, Amount::Integer(1000));
        assert!(!amount.fits(IntWidth::U8));
        assert!(amount.fits(IntWidth::U64));
    }

    #[rstest]
    #[case("255", IntWidth::U8, true)]
    #[case("256", IntWidth::U8, false)]
    #[case("18446744073709551615", IntWidth::U64, true)]
    #[case("18446744073709551616", IntWidth::U64, false)]
    #[case("2.5", IntWidth::U64, false)]
    #[case("1e2", IntWidth::U8, true)]
    #[case("1e300", IntWidth::U64, false)]
    fn width_bounds(#[case] raw: &str, #[case] width: IntWidth, #[case] fits: bool) {
        let permissive = parse_amount(raw, width, AmountPolicy::Permissive).unwrap();
        assert_eq!(permissive.fits(width), fits);
        let strict = parse_amount(raw, width, AmountPolicy::Strict);
        if fits {
            assert_eq!(strict, Ok(permissive));
        } else {
            assert_eq!(strict, Err(ValidationError::AmountOutOfRange(raw.to_owned(), width)));
        }
    }

    #[rstest]
    #[case("18446744073709551615")]
    #[case("18446744073709551616")]
    #[case("9007199254740993")]
    #[case("+9007199254740993")]
    fn integers_are_exact(#[case] raw: &str) {
        let amount = parse_amount(raw, IntWidth::U64, AmountPolicy::Permissive).unwrap();
        assert_eq!(amount.to_string(), raw.trim_start_matches('+'));
    }

    #[test]
    fn leading_zeros_dropped() {
        let amount = parse_amount("007", IntWidth::U8, AmountPolicy::Strict).unwrap();
        assert_eq!(amount, Amount::Integer(7));
        assert_eq!(amount.to_string(), "7");
    }

    #[test]
    fn record_presence() {
        assert_eq!(require_record("  \n\t", "record"), Err(ValidationError::EmptyRecord("record")));
        assert_eq!(require_record(" {} ", "record"), Ok(" {} "));
    }

    #[test]
    fn address_presence() {
        assert_eq!(require_address(""), Err(ValidationError::EmptyAddress));
        assert_eq!(require_address("aleo1xyz"), Ok("aleo1xyz"));
    }
}
