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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::{FlowError, TxId};

/// Action cards of the panel, one form each.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Card {
    #[display("buy-public")]
    BuyPublic,

    #[display("buy-private")]
    BuyPrivate,

    #[display("join")]
    JoinRecords,

    #[display("split")]
    SplitRecord,

    #[display("check")]
    CheckCoffee,

    #[display("records")]
    FetchRecords,
}

impl Card {
    pub const ALL: [Card; 6] = [
        Card::BuyPublic,
        Card::BuyPrivate,
        Card::JoinRecords,
        Card::SplitRecord,
        Card::CheckCoffee,
        Card::FetchRecords,
    ];

    /// Whether the card submits a transaction, as opposed to reading data.
    pub fn is_submission(self) -> bool {
        matches!(self, Card::BuyPublic | Card::BuyPrivate | Card::JoinRecords | Card::SplitRecord)
    }
}

/// Shared marker of a submission being in flight.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    pub fn is_set(&self) -> bool { self.0.load(Ordering::Acquire) }

    /// Marks the submission as started, unless one is already running.
    ///
    /// The marker is cleared when the returned guard is dropped, whichever way the flow exits.
    pub fn begin(&self) -> Option<InFlightGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(self.0.clone()))
    }
}

#[derive(Debug)]
pub struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) { self.0.store(false, Ordering::Release); }
}

/// Input state of a single card.
#[derive(Debug, Default)]
pub struct FormState {
    fields: IndexMap<&'static str, String>,
    in_flight: InFlight,
    last_error: Option<String>,
    last_result: Option<String>,
}

impl FormState {
    pub fn with_fields(fields: &[&'static str]) -> Self {
        FormState {
            fields: fields.iter().map(|name| (*name, String::new())).collect(),
            ..default!()
        }
    }

    pub fn has_field(&self, field: &str) -> bool { self.fields.contains_key(field) }

    /// Sets value of a known field, returning `false` if the form has no such field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> &str { self.fields.get(field).map(String::as_str).unwrap_or("") }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn is_submitting(&self) -> bool { self.in_flight.is_set() }

    /// Handle to the in-flight marker, for observing the form from elsewhere.
    pub fn in_flight(&self) -> InFlight { self.in_flight.clone() }

    pub fn begin(&self) -> Result<InFlightGuard, FlowError> {
        self.in_flight.begin().ok_or(FlowError::Busy)
    }

    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

    pub fn last_result(&self) -> Option<&str> { self.last_result.as_deref() }

    pub(crate) fn set_error(&mut self, alert: impl Into<String>) {
        self.last_result = None;
        self.last_error = Some(alert.into());
    }

    pub(crate) fn set_result(&mut self, result: impl Into<String>) {
        self.last_error = None;
        self.last_result = Some(result.into());
    }
}

/// Completion message of a submitted transaction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TxNotice {
    pub card: Card,
    pub tx_id: TxId,
    pub submitted_at: DateTime<Utc>,
}

impl TxNotice {
    pub fn new(card: Card, tx_id: TxId) -> Self { TxNotice { card, tx_id, submitted_at: Utc::now() } }
}

/// Sending side of the [`LastTx`] observable, handed to flows.
#[derive(Clone, Debug)]
pub struct TxPublisher(Sender<TxNotice>);

impl TxPublisher {
    pub fn publish(&self, notice: TxNotice) {
        if self.0.send(notice).is_err() {
            debug!("Last transaction observer is gone, notice dropped");
        }
    }
}

/// Identifier of the most recently submitted transaction, across all cards.
///
/// Last write wins: notices are applied in the order they are received and no ordering between
/// flows of different cards is implied.
#[derive(Debug)]
pub struct LastTx {
    sender: Sender<TxNotice>,
    receiver: Receiver<TxNotice>,
    latest: Option<TxNotice>,
}

impl Default for LastTx {
    fn default() -> Self { LastTx::new() }
}

impl LastTx {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        LastTx { sender, receiver, latest: None }
    }

    pub fn publisher(&self) -> TxPublisher { TxPublisher(self.sender.clone()) }

    pub fn latest(&mut self) -> Option<&TxNotice> {
        if let Some(notice) = self.receiver.try_iter().last() {
            self.latest = Some(notice);
        }
        self.latest.as_ref()
    }
}
