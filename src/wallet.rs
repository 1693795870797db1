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

use serde_json::Value;

use crate::{
    CoffeeCall, FlowError, Protocol, Transaction, TransactionRequest, Transition, TxId, TxParams,
    WalletError,
};

/// Capabilities of a connected wallet.
///
/// Implementations own signing, proving and broadcasting; this crate only passes plain data in
/// and gets opaque identifiers back. Any method may block until the user approves or declines
/// the request in the wallet, and no timeout is applied on top of that.
pub trait Wallet {
    /// Submits a declarative transaction request in a single call.
    fn submit_direct(&self, request: &TransactionRequest) -> Result<TxId, WalletError>;

    /// Requests approval and submission of an already constructed transaction.
    fn submit_constructed(&self, tx: &Transaction) -> Result<TxId, WalletError>;

    /// Lists record entries the wallet holds for a program.
    ///
    /// Entries are returned in the shape the wallet uses; see
    /// [`crate::normalize_records`] for the tolerated variations.
    fn record_plaintexts(&self, program: &str) -> Result<Vec<Value>, WalletError>;
}

/// Wallet connection, as supplied by whoever manages the wallet.
#[derive(Default)]
pub struct ConnectionContext {
    address: Option<String>,
    wallet: Option<Box<dyn Wallet>>,
}

impl ConnectionContext {
    pub fn disconnected() -> Self { ConnectionContext::default() }

    pub fn connected(address: impl Into<String>, wallet: impl Wallet + 'static) -> Self {
        ConnectionContext { address: Some(address.into()), wallet: Some(Box::new(wallet)) }
    }

    pub fn with(address: Option<String>, wallet: Option<Box<dyn Wallet>>) -> Self {
        ConnectionContext { address, wallet }
    }

    pub fn address(&self) -> Option<&str> { self.address.as_deref().filter(|addr| !addr.is_empty()) }

    pub fn wallet(&self) -> Option<&dyn Wallet> { self.wallet.as_deref() }

    pub fn is_connected(&self) -> bool { self.signer().is_ok() }

    /// Sender address together with the wallet able to sign for it.
    pub fn signer(&self) -> Result<(&str, &dyn Wallet), FlowError> {
        match (self.address(), self.wallet()) {
            (Some(address), Some(wallet)) => Ok((address, wallet)),
            _ => Err(FlowError::NotConnected),
        }
    }

    pub fn disconnect(&mut self) {
        self.address = None;
        self.wallet = None;
    }

    /// Submits a contract call through the protocol it requires.
    pub fn dispatch(&self, params: &TxParams, call: &CoffeeCall) -> Result<TxId, FlowError> {
        let (address, wallet) = self.signer()?;
        let function = call.function_name();
        let tx_id = match call.protocol() {
            Protocol::Direct => {
                let transition = Transition::new(&params.program, function, call.inputs());
                let request = TransactionRequest::with(
                    address,
                    &params.network,
                    transition,
                    params.fee,
                    params.fee_private,
                );
                debug!("Requesting {function} from the wallet via direct request");
                trace!("Transaction request: {request:?}");
                wallet.submit_direct(&request)?
            }
            Protocol::Constructed => {
                let tx = Transaction::create(
                    address,
                    &params.network,
                    &params.program,
                    function,
                    call.inputs(),
                    params.fee,
                    params.fee_private,
                );
                debug!("Requesting approval of constructed {function} transaction");
                trace!("Transaction: {tx:?}");
                wallet.submit_constructed(&tx)?
            }
        };
        info!("Wallet accepted {function} transaction {tx_id}");
        Ok(tx_id)
    }
}
