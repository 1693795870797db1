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

use serde_crate::{Deserialize, Serialize};

use crate::{TransitionInput, DEFAULT_FEE, TESTNET_BETA, WORKSHOP_PROGRAM};

/// Wallet entry point used to submit a call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[display(lowercase)]
pub enum Protocol {
    /// Declarative [`TransactionRequest`] passed to the wallet in a single call.
    Direct,

    /// [`Transaction`] object built with [`Transaction::create`] and then passed to the wallet
    /// for approval.
    Constructed,
}

/// Transaction identifier returned by a wallet.
///
/// Informational only: submission is fire-and-forget and the identifier is never polled.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display)]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_crate", transparent)]
#[display("{0}")]
pub struct TxId(String);

impl TxId {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for TxId {
    fn from(id: String) -> Self { TxId(id) }
}

impl From<&str> for TxId {
    fn from(id: &str) -> Self { TxId(id.to_owned()) }
}

/// Named invocation of a contract function.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase")]
pub struct Transition {
    pub program: String,
    pub function_name: String,
    pub inputs: Vec<TransitionInput>,
}

impl Transition {
    pub fn new(
        program: impl Into<String>,
        function_name: impl Into<String>,
        inputs: Vec<TransitionInput>,
    ) -> Self {
        Transition { program: program.into(), function_name: function_name.into(), inputs }
    }
}

/// Descriptor for the [`Protocol::Direct`] submission.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase")]
pub struct TransactionRequest {
    pub address: String,
    pub chain_id: String,
    transitions: Vec<Transition>,
    pub fee: u64,
    pub fee_private: bool,
}

impl TransactionRequest {
    /// Constructs a request with its first transition; a request is never empty.
    pub fn with(
        address: impl Into<String>,
        chain_id: impl Into<String>,
        transition: Transition,
        fee: u64,
        fee_private: bool,
    ) -> Self {
        TransactionRequest {
            address: address.into(),
            chain_id: chain_id.into(),
            transitions: vec![transition],
            fee,
            fee_private,
        }
    }

    pub fn push_transition(&mut self, transition: Transition) { self.transitions.push(transition) }

    pub fn transitions(&self) -> &[Transition] { &self.transitions }
}

/// Transaction object for the [`Protocol::Constructed`] submission.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase")]
pub struct Transaction {
    pub address: String,
    pub chain_id: String,
    pub transitions: Vec<Transition>,
    pub fee: u64,
    pub fee_private: bool,
}

impl Transaction {
    pub fn create(
        address: impl Into<String>,
        network: impl Into<String>,
        program: impl Into<String>,
        function_name: impl Into<String>,
        inputs: Vec<TransitionInput>,
        fee: u64,
        fee_private: bool,
    ) -> Self {
        Transaction {
            address: address.into(),
            chain_id: network.into(),
            transitions: vec![Transition::new(program, function_name, inputs)],
            fee,
            fee_private,
        }
    }
}

/// Fixed parameters of every coffee shop transaction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TxParams {
    pub network: String,
    pub program: String,
    /// Fee in microcredits.
    pub fee: u64,
    pub fee_private: bool,
}

impl Default for TxParams {
    fn default() -> Self {
        TxParams {
            network: TESTNET_BETA.to_owned(),
            program: WORKSHOP_PROGRAM.to_owned(),
            fee: DEFAULT_FEE,
            fee_private: false,
        }
    }
}
