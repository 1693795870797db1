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

#![allow(dead_code)]

pub mod stub;

use std::cell::RefCell;
use std::rc::Rc;

use coffee::{
    Config, ConnectionContext, InFlight, MappingQuery, Panel, QueryError, Transaction,
    TransactionRequest, TxId, Wallet, WalletError,
};
use serde_json::Value;

pub const SENDER: &str = "aleo1sender0000000000000000000000000000000000000000000000000000";

/// Everything a [`MockWallet`] was asked to do.
#[derive(Clone, Default)]
pub struct WalletLog {
    pub direct: Rc<RefCell<Vec<TransactionRequest>>>,
    pub constructed: Rc<RefCell<Vec<Transaction>>>,
    pub record_requests: Rc<RefCell<Vec<String>>>,
    /// In-flight marker to sample on every call.
    pub probe: Rc<RefCell<Option<InFlight>>>,
    /// Samples of the probed marker taken during the calls.
    pub in_flight_seen: Rc<RefCell<Vec<bool>>>,
}

impl WalletLog {
    pub fn calls(&self) -> usize {
        self.direct.borrow().len() +
            self.constructed.borrow().len() +
            self.record_requests.borrow().len()
    }

    pub fn watch(&self, in_flight: InFlight) { *self.probe.borrow_mut() = Some(in_flight); }

    fn sample(&self) {
        if let Some(probe) = &*self.probe.borrow() {
            self.in_flight_seen.borrow_mut().push(probe.is_set());
        }
    }
}

pub struct MockWallet {
    log: WalletLog,
    fail: bool,
    records: Vec<Value>,
    tx_id: &'static str,
}

impl MockWallet {
    pub fn new(log: &WalletLog) -> Self {
        MockWallet { log: log.clone(), fail: false, records: vec![], tx_id: "at1mocked" }
    }

    pub fn failing(log: &WalletLog) -> Self { MockWallet { fail: true, ..MockWallet::new(log) } }

    pub fn with_records(mut self, records: Vec<Value>) -> Self {
        self.records = records;
        self
    }

    pub fn with_tx_id(mut self, tx_id: &'static str) -> Self {
        self.tx_id = tx_id;
        self
    }

    fn reply(&self) -> Result<TxId, WalletError> {
        self.log.sample();
        if self.fail {
            return Err(WalletError::Rejected);
        }
        Ok(TxId::from(self.tx_id))
    }
}

impl Wallet for MockWallet {
    fn submit_direct(&self, request: &TransactionRequest) -> Result<TxId, WalletError> {
        self.log.direct.borrow_mut().push(request.clone());
        self.reply()
    }

    fn submit_constructed(&self, tx: &Transaction) -> Result<TxId, WalletError> {
        self.log.constructed.borrow_mut().push(tx.clone());
        self.reply()
    }

    fn record_plaintexts(&self, program: &str) -> Result<Vec<Value>, WalletError> {
        self.log.record_requests.borrow_mut().push(program.to_owned());
        self.log.sample();
        if self.fail {
            return Err(WalletError::Status(500));
        }
        Ok(self.records.clone())
    }
}

/// Mapping source answering every lookup the same way.
#[derive(Clone, Default)]
pub struct MockQuery {
    pub value: Option<Value>,
    pub status: Option<u16>,
    pub lookups: Rc<RefCell<Vec<(String, String, String)>>>,
}

impl MockQuery {
    pub fn with_value(value: Value) -> Self { MockQuery { value: Some(value), ..default!() } }

    pub fn failing(status: u16) -> Self { MockQuery { status: Some(status), ..default!() } }
}

impl MappingQuery for MockQuery {
    fn get_value(
        &self,
        program: &str,
        mapping: &str,
        key: &str,
    ) -> Result<Option<Value>, QueryError> {
        self.lookups
            .borrow_mut()
            .push((program.to_owned(), mapping.to_owned(), key.to_owned()));
        if let Some(status) = self.status {
            return Err(QueryError::Status(status));
        }
        Ok(self.value.clone())
    }
}

pub fn connected(wallet: MockWallet) -> ConnectionContext { ConnectionContext::connected(SENDER, wallet) }

pub fn panel(connection: ConnectionContext, query: MockQuery) -> Panel {
    Panel::new(connection, query, &Config::default())
}
