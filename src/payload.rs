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

//! Conversion of validated form input into positional contract call arguments.

use serde_crate::Serialize;
use serde_json::Value;

use crate::{Amount, Protocol};

/// Unsigned integer width declared by a contract function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum IntWidth {
    #[display("u8")]
    U8,

    #[display("u64")]
    U64,
}

impl IntWidth {
    /// Largest value of the width.
    pub fn max(self) -> u128 {
        match self {
            IntWidth::U8 => u8::MAX as u128,
            IntWidth::U64 => u64::MAX as u128,
        }
    }
}

/// Renders an amount as a typed contract literal, like `3u8`.
pub fn typed_literal(amount: Amount, width: IntWidth) -> String {
    format!("{amount}{width}")
}

/// Record pasted by a user.
///
/// The wallet defines the record shape, so nothing inside is checked here. Text which parses as
/// JSON is forwarded as the parsed structure; anything else is forwarded verbatim and it is up
/// to the wallet or the contract to reject it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize)]
#[serde(crate = "serde_crate", untagged)]
pub enum RecordInput {
    Structured(Value),
    Raw(String),
}

impl RecordInput {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => RecordInput::Structured(value),
            Err(_) => RecordInput::Raw(text.to_owned()),
        }
    }

    pub fn is_structured(&self) -> bool { matches!(self, RecordInput::Structured(_)) }
}

/// A single positional input of a transition.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize)]
#[serde(crate = "serde_crate", untagged)]
pub enum TransitionInput {
    Record(RecordInput),
    Literal(String),
}

impl From<RecordInput> for TransitionInput {
    fn from(record: RecordInput) -> Self { TransitionInput::Record(record) }
}

/// Call of one of the coffee shop contract functions.
#[derive(Clone, PartialEq, Debug)]
pub enum CoffeeCall {
    BuyPublic { amount: Amount },
    BuyPrivate { record: RecordInput, amount: Amount },
    CombineRecords { first: RecordInput, second: RecordInput },
    SplitRecords { record: RecordInput, amount: Amount },
}

impl CoffeeCall {
    pub fn function_name(&self) -> &'static str {
        match self {
            CoffeeCall::BuyPublic { .. } => "buy_public",
            CoffeeCall::BuyPrivate { .. } => "buy_private",
            CoffeeCall::CombineRecords { .. } => "combine_records",
            CoffeeCall::SplitRecords { .. } => "split_records",
        }
    }

    /// Submission protocol the wallet expects for this call.
    ///
    /// Public purchases go through the declarative request; everything spending a record is
    /// constructed as a transaction object first.
    pub fn protocol(&self) -> Protocol {
        match self {
            CoffeeCall::BuyPublic { .. } => Protocol::Direct,
            _ => Protocol::Constructed,
        }
    }

    pub fn inputs(&self) -> Vec<TransitionInput> {
        match self {
            CoffeeCall::BuyPublic { amount } => {
                vec![TransitionInput::Literal(typed_literal(*amount, IntWidth::U8))]
            }
            CoffeeCall::BuyPrivate { record, amount } => vec![
                record.clone().into(),
                TransitionInput::Literal(typed_literal(*amount, IntWidth::U8)),
            ],
            CoffeeCall::CombineRecords { first, second } => {
                vec![first.clone().into(), second.clone().into()]
            }
            CoffeeCall::SplitRecords { record, amount } => vec![
                record.clone().into(),
                TransitionInput::Literal(typed_literal(*amount, IntWidth::U64)),
            ],
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{parse_amount, AmountPolicy};

    fn amount(raw: &str) -> Amount { parse_amount(raw, IntWidth::U8, AmountPolicy::Permissive).unwrap() }

    #[test]
    fn literal_suffix() {
        assert_eq!(typed_literal(amount("3"), IntWidth::U8), "3u8");
        assert_eq!(typed_literal(amount("42"), IntWidth::U64), "42u64");
        assert_eq!(typed_literal(amount("2.5"), IntWidth::U8), "2.5u8");
        assert_eq!(
            typed_literal(amount("18446744073709551615"), IntWidth::U64),
            "18446744073709551615u64"
        );
    }

    #[test]
    fn record_json_is_parsed() {
        let text = r#"{"owner":"aleo1abc.private","microcredits":"5u64.private"}"#;
        assert_eq!(
            RecordInput::parse(text),
            RecordInput::Structured(json!({
                "owner": "aleo1abc.private",
                "microcredits": "5u64.private"
            }))
        );
    }

    #[test]
    fn record_plaintext_passes_through() {
        let text = "{\n  owner: aleo1abc.private,\n  microcredits: 5u64.private,\n  _nonce: 1group.public\n}";
        let record = RecordInput::parse(text);
        assert!(!record.is_structured());
        assert_eq!(record, RecordInput::Raw(text.to_owned()));
        assert_eq!(serde_json::to_value(&record).unwrap(), json!(text));
    }

    #[test]
    fn call_inputs() {
        let record = RecordInput::parse(r#"{"id":1}"#);
        let call = CoffeeCall::BuyPrivate { record: record.clone(), amount: amount("2") };
        assert_eq!(call.function_name(), "buy_private");
        assert_eq!(call.protocol(), Protocol::Constructed);
        assert_eq!(serde_json::to_value(call.inputs()).unwrap(), json!([{"id": 1}, "2u8"]));

        let call = CoffeeCall::SplitRecords { record, amount: amount("10") };
        assert_eq!(serde_json::to_value(call.inputs()).unwrap(), json!([{"id": 1}, "10u64"]));

        let call = CoffeeCall::BuyPublic { amount: amount("1") };
        assert_eq!(call.protocol(), Protocol::Direct);
        assert_eq!(call.inputs(), vec![TransitionInput::Literal(s!("1u8"))]);
    }
}
