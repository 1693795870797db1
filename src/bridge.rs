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

//! Wallet reached over a local HTTP bridge.
//!
//! Browser wallets expose their adapter only to web pages; the bridge is a small companion
//! service forwarding the same adapter calls from outside a browser. Endpoints:
//!
//! - `GET  /account` → `{"address": "aleo1..."}`, `null` address when no account is connected;
//! - `POST /transaction/request` with a [`TransactionRequest`] → `{"transactionId": "..."}`;
//! - `POST /transaction/submit` with a [`Transaction`] → `{"transactionId": "..."}`;
//! - `GET  /records/{program}` → JSON array of record entries.
//!
//! HTTP 401 means the wallet got disconnected, 403 that the user declined the request.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde_crate::de::DeserializeOwned;
use serde_crate::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ConnectionContext, Transaction, TransactionRequest, TxId, Wallet, WalletError};

#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Deserialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase")]
struct Account {
    #[serde(default)]
    address: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Deserialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase")]
struct Receipt {
    transaction_id: TxId,
}

pub struct BridgeWallet {
    url: String,
    client: Client,
}

impl BridgeWallet {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, WalletError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(BridgeWallet::with_client(url, builder.build()?))
    }

    /// Uses a preconfigured HTTP client, e.g. one with custom TLS roots or proxy settings.
    pub fn with_client(url: &str, client: Client) -> Self {
        BridgeWallet { url: url.trim_end_matches('/').to_owned(), client }
    }

    pub fn url(&self) -> &str { &self.url }

    /// Address of the account currently connected in the wallet, if any.
    pub fn account(&self) -> Result<Option<String>, WalletError> {
        let account: Account = self.get("account")?;
        Ok(account.address.filter(|addr| !addr.is_empty()))
    }

    /// Builds connection context from the account the wallet reports.
    ///
    /// A wallet without a connected account results in a disconnected context.
    pub fn connect(self) -> Result<ConnectionContext, WalletError> {
        Ok(match self.account()? {
            Some(address) => {
                info!("Connected to wallet account {address} via {}", self.url);
                ConnectionContext::connected(address, self)
            }
            None => {
                warn!("Wallet bridge at {} has no connected account", self.url);
                ConnectionContext::disconnected()
            }
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, WalletError> {
        let url = format!("{}/{path}", self.url);
        debug!("Wallet bridge request GET {url}");
        let resp = self.client.get(&url).send()?;
        decode(resp)
    }

    fn post(&self, path: &str, body: &impl Serialize) -> Result<TxId, WalletError> {
        let url = format!("{}/{path}", self.url);
        debug!("Wallet bridge request POST {url}");
        let resp = self.client.post(&url).json(body).send()?;
        let receipt: Receipt = decode(resp)?;
        Ok(receipt.transaction_id)
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, WalletError> {
    match resp.status() {
        status if status.is_success() => {
            let text = resp.text()?;
            Ok(serde_json::from_str(&text)?)
        }
        StatusCode::UNAUTHORIZED => Err(WalletError::NotConnected),
        StatusCode::FORBIDDEN => Err(WalletError::Rejected),
        status => Err(WalletError::Status(status.as_u16())),
    }
}

impl Wallet for BridgeWallet {
    fn submit_direct(&self, request: &TransactionRequest) -> Result<TxId, WalletError> {
        self.post("transaction/request", request)
    }

    fn submit_constructed(&self, tx: &Transaction) -> Result<TxId, WalletError> {
        self.post("transaction/submit", tx)
    }

    fn record_plaintexts(&self, program: &str) -> Result<Vec<Value>, WalletError> {
        self.get(&format!("records/{program}"))
    }
}
