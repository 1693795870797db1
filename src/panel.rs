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

//! Coffee actions panel: the forms and the flows submitting them.
//!
//! Each flow follows the same course: it checks the wallet connection, validates its own form,
//! builds the contract call payload and passes it to the wallet (or to the mapping API for the
//! coffee check). The form is marked as submitting for the whole duration and the mark is
//! released on every exit path. External failures are logged and presented with a generic
//! message specific to the card.

use core::fmt::{self, Display, Formatter};

use indexmap::IndexMap;

use crate::{
    coffee_total, fetch_records, parse_amount, require_address, require_record, AmountPolicy,
    Card, CoffeeCall, Config, ConnectionContext, FetchedRecord, FlowError, FormState, IntWidth,
    LastTx, MappingQuery, RecordInput, TxId, TxNotice, TxParams, TxPublisher, ValidationError,
};

pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_RECORD: &str = "record";
pub const FIELD_RECORD_A: &str = "record_a";
pub const FIELD_RECORD_B: &str = "record_b";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_PROGRAM: &str = "program";

impl Card {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Card::BuyPublic => &[FIELD_AMOUNT],
            Card::BuyPrivate => &[FIELD_RECORD, FIELD_AMOUNT],
            Card::JoinRecords => &[FIELD_RECORD_A, FIELD_RECORD_B],
            Card::SplitRecord => &[FIELD_RECORD, FIELD_AMOUNT],
            Card::CheckCoffee => &[FIELD_ADDRESS],
            Card::FetchRecords => &[FIELD_PROGRAM],
        }
    }

    /// User-facing message for a failed flow of this card.
    pub fn alert(self, err: &FlowError) -> &'static str {
        match err {
            FlowError::NotConnected => "No wallet connected",
            FlowError::Busy => "Submission is already in progress",
            FlowError::Validation(err) => self.validation_alert(err),
            FlowError::Wallet(_) | FlowError::Query(_) => self.failure_alert(),
        }
    }

    fn validation_alert(self, err: &ValidationError) -> &'static str {
        match err {
            ValidationError::InvalidAmount(_) | ValidationError::AmountOutOfRange(..) => match self {
                Card::SplitRecord => "Enter a valid split amount (u64)",
                _ => "Enter a valid coffee amount (u8)",
            },
            ValidationError::EmptyRecord(_) => match self {
                Card::BuyPrivate => "Paste a credits.aleo/credits record JSON",
                Card::JoinRecords => "Paste two credits.aleo/credits records (JSON)",
                _ => "Paste a credits.aleo/credits record (JSON)",
            },
            ValidationError::EmptyAddress => "Enter an Aleo address",
            ValidationError::UnknownField(_) => "Unknown form field",
        }
    }

    fn failure_alert(self) -> &'static str {
        match self {
            Card::BuyPublic => "Transaction failed. See console for details.",
            Card::BuyPrivate => "Private purchase failed. Check your record JSON and try again.",
            Card::JoinRecords => "Join failed. Check your record JSONs and try again.",
            Card::SplitRecord => "Split failed. Check your record JSON and try again.",
            Card::CheckCoffee => "Unable to read mapping value right now.",
            Card::FetchRecords => "Could not fetch records.",
        }
    }
}

/// Successful completion of a flow.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Submitted(TxId),
    CoffeeTotal(String),
    Records(Vec<FetchedRecord>),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Submitted(tx_id) => write!(f, "Submitted. Track in wallet. Tx: {tx_id}"),
            Outcome::CoffeeTotal(total) => write!(f, "Total coffee: {total}"),
            Outcome::Records(records) => write!(f, "Fetched {} records", records.len()),
        }
    }
}

pub struct Panel {
    connection: ConnectionContext,
    query: Box<dyn MappingQuery>,
    params: TxParams,
    policy: AmountPolicy,
    forms: IndexMap<Card, FormState>,
    last_tx: LastTx,
    checked_amount: Option<String>,
    fetched_records: Vec<FetchedRecord>,
}

impl Panel {
    pub fn new(
        connection: ConnectionContext,
        query: impl MappingQuery + 'static,
        config: &Config,
    ) -> Self {
        let mut forms = Card::ALL
            .into_iter()
            .map(|card| (card, FormState::with_fields(card.fields())))
            .collect::<IndexMap<_, _>>();
        if let Some(form) = forms.get_mut(&Card::FetchRecords) {
            form.set(FIELD_PROGRAM, config.records_program.clone());
        }
        Panel {
            connection,
            query: Box::new(query),
            params: config.tx_params(),
            policy: config.amount_policy,
            forms,
            last_tx: LastTx::new(),
            checked_amount: None,
            fetched_records: vec![],
        }
    }

    pub fn connection(&self) -> &ConnectionContext { &self.connection }

    /// Replaces the wallet connection, e.g. after the wallet got (dis)connected.
    pub fn set_connection(&mut self, connection: ConnectionContext) { self.connection = connection; }

    pub fn form(&self, card: Card) -> &FormState { &self.forms[&card] }

    pub fn set_field(
        &mut self,
        card: Card,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let form = &mut self.forms[&card];
        if !form.set(field, value) {
            return Err(ValidationError::UnknownField(field.to_owned()));
        }
        Ok(())
    }

    /// Identifier of the most recent transaction submitted from any card.
    pub fn last_tx(&mut self) -> Option<&TxNotice> { self.last_tx.latest() }

    /// Publisher feeding [`Panel::last_tx`], for flows submitted outside of the panel.
    pub fn tx_publisher(&self) -> TxPublisher { self.last_tx.publisher() }

    pub fn checked_amount(&self) -> Option<&str> { self.checked_amount.as_deref() }

    pub fn fetched_records(&self) -> &[FetchedRecord] { &self.fetched_records }

    /// Runs the flow of a card with the current content of its form.
    pub fn submit(&mut self, card: Card) -> Result<Outcome, FlowError> {
        let _guard = self.form(card).begin()?;
        let res = self.run(card);
        match &res {
            Ok(outcome) => {
                debug!("Flow {card} completed: {outcome}");
                self.forms[&card].set_result(outcome.to_string());
            }
            Err(err) => {
                if err.is_external() {
                    error!("Flow {card} failed: {err}");
                } else {
                    debug!("Flow {card} blocked: {err}");
                }
                self.forms[&card].set_error(card.alert(err));
            }
        }
        res
    }

    fn run(&mut self, card: Card) -> Result<Outcome, FlowError> {
        match card {
            Card::BuyPublic => {
                self.connection.signer()?;
                let amount = self.amount(card, IntWidth::U8)?;
                self.send(card, CoffeeCall::BuyPublic { amount })
            }
            Card::BuyPrivate => {
                self.connection.signer()?;
                let amount = self.amount(card, IntWidth::U8)?;
                let record = self.record(card, FIELD_RECORD)?;
                self.send(card, CoffeeCall::BuyPrivate { record, amount })
            }
            Card::JoinRecords => {
                self.connection.signer()?;
                let form = self.form(card);
                require_record(form.get(FIELD_RECORD_A), FIELD_RECORD_A)?;
                require_record(form.get(FIELD_RECORD_B), FIELD_RECORD_B)?;
                let first = RecordInput::parse(form.get(FIELD_RECORD_A));
                let second = RecordInput::parse(form.get(FIELD_RECORD_B));
                self.send(card, CoffeeCall::CombineRecords { first, second })
            }
            Card::SplitRecord => {
                self.connection.signer()?;
                let record = self.record(card, FIELD_RECORD)?;
                let amount = self.amount(card, IntWidth::U64)?;
                self.send(card, CoffeeCall::SplitRecords { record, amount })
            }
            Card::CheckCoffee => {
                let address = require_address(self.form(card).get(FIELD_ADDRESS))?.to_owned();
                self.checked_amount = None;
                let total = coffee_total(self.query.as_ref(), &self.params.program, &address)?;
                info!("Address {address} has {total} coffee");
                self.checked_amount = Some(total.clone());
                Ok(Outcome::CoffeeTotal(total))
            }
            Card::FetchRecords => {
                let wallet = self.connection.wallet().ok_or(FlowError::NotConnected)?;
                let program = self.form(card).get(FIELD_PROGRAM).to_owned();
                self.fetched_records.clear();
                let records = fetch_records(wallet, &program)?;
                self.fetched_records = records.clone();
                Ok(Outcome::Records(records))
            }
        }
    }

    fn amount(&self, card: Card, width: IntWidth) -> Result<crate::Amount, ValidationError> {
        parse_amount(self.form(card).get(FIELD_AMOUNT), width, self.policy)
    }

    fn record(&self, card: Card, field: &'static str) -> Result<RecordInput, ValidationError> {
        require_record(self.form(card).get(field), field).map(RecordInput::parse)
    }

    fn send(&self, card: Card, call: CoffeeCall) -> Result<Outcome, FlowError> {
        let tx_id = self.connection.dispatch(&self.params, &call)?;
        self.last_tx
            .publisher()
            .publish(TxNotice::new(card, tx_id.clone()));
        Ok(Outcome::Submitted(tx_id))
    }
}
