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

use std::io;

use amplify::IoError;

use crate::IntWidth;

/// Local input check failure. Blocks a flow before any external call is made.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum ValidationError {
    /// '{0}' is not a positive number.
    InvalidAmount(String),

    /// amount '{0}' doesn't fit into {1}.
    AmountOutOfRange(String, IntWidth),

    /// record field '{0}' is empty.
    EmptyRecord(&'static str),

    /// address is not specified.
    EmptyAddress,

    /// form has no field named '{0}'.
    UnknownField(String),
}

#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum WalletError {
    /// wallet is not connected.
    NotConnected,

    /// the request was declined in the wallet.
    Rejected,

    /// wallet bridge is unreachable: {0}
    #[from]
    Transport(reqwest::Error),

    /// wallet bridge responded with HTTP status {0}.
    Status(u16),

    /// wallet returned malformed data: {0}
    #[from]
    Malformed(serde_json::Error),
}

#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum QueryError {
    /// mapping API is unreachable: {0}
    #[from]
    Transport(reqwest::Error),

    /// mapping API responded with HTTP status {0}.
    Status(u16),

    /// mapping API returned malformed data: {0}
    #[from]
    Malformed(serde_json::Error),
}

#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ConfigError {
    /// unable to access configuration file: {0}
    #[from]
    #[from(io::Error)]
    File(IoError),

    /// invalid configuration: {0}
    #[from]
    Parse(toml::de::Error),

    /// unable to serialize configuration: {0}
    #[from]
    Serialize(toml::ser::Error),
}

/// Failure of a single panel flow.
///
/// Failures are isolated: a failing flow leaves every other flow of the panel usable, and no
/// variant is retried automatically.
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum FlowError {
    #[from]
    #[display(inner)]
    Validation(ValidationError),

    /// no wallet connected.
    NotConnected,

    /// a submission of this form is already in flight.
    Busy,

    #[from]
    #[display(inner)]
    Wallet(WalletError),

    #[from]
    #[display(inner)]
    Query(QueryError),
}

impl FlowError {
    /// Whether the error comes from an external collaborator rather than from local checks.
    pub fn is_external(&self) -> bool { matches!(self, FlowError::Wallet(_) | FlowError::Query(_)) }
}
