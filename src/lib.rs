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

//! Client library for the `workshop_test.aleo` coffee shop contract.
//!
//! The library validates user input, builds contract call parameters and hands them to an
//! external wallet for signing and submission. It also reads the public `total_coffee` mapping
//! from a remote indexer and lists records held by the wallet. All cryptography, transaction
//! authorization and chain access live outside: in the [`Wallet`] and [`MappingQuery`]
//! implementations.

#![allow(clippy::result_large_err)]

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate log;

pub mod validate;
pub mod payload;
mod errors;
mod tx;
mod wallet;
mod bridge;
mod mapping;
mod records;
mod form;
mod panel;
mod config;

pub use bridge::BridgeWallet;
pub use config::Config;
pub use errors::{ConfigError, FlowError, QueryError, ValidationError, WalletError};
pub use form::{Card, FormState, InFlight, InFlightGuard, LastTx, TxNotice, TxPublisher};
pub use mapping::{coffee_total, extract_value, render_value, AleoscanClient, MappingQuery};
pub use panel::{
    Outcome, Panel, FIELD_ADDRESS, FIELD_AMOUNT, FIELD_PROGRAM, FIELD_RECORD, FIELD_RECORD_A,
    FIELD_RECORD_B,
};
pub use payload::{typed_literal, CoffeeCall, IntWidth, RecordInput, TransitionInput};
pub use records::{fetch_records, normalize_records, FetchedRecord};
pub use tx::{Protocol, Transaction, TransactionRequest, Transition, TxId, TxParams};
pub use validate::{parse_amount, require_address, require_record, Amount, AmountPolicy};
pub use wallet::{ConnectionContext, Wallet};

/// Network tag the workshop contract is deployed to.
pub const TESTNET_BETA: &str = "testnetbeta";
/// Workshop contract program id.
pub const WORKSHOP_PROGRAM: &str = "workshop_test.aleo";
/// Program whose records are listed by default.
pub const CREDITS_PROGRAM: &str = "credits.aleo";
/// Public mapping holding the number of coffees bought per address.
pub const COFFEE_MAPPING: &str = "total_coffee";
/// Value of an unset `total_coffee` entry.
pub const COFFEE_ZERO: &str = "0u8";
/// Transaction fee, in microcredits.
pub const DEFAULT_FEE: u64 = 100_000;
pub const DEFAULT_API: &str = "https://api.aleoscan.io/v3";
pub const DEFAULT_BRIDGE: &str = "http://127.0.0.1:7777";
