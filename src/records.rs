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
use serde_json::Value;

use crate::{Wallet, WalletError};

/// Record entry prepared for display and copying.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase")]
pub struct FetchedRecord {
    pub plaintext: String,
    pub spent: bool,
}

impl FetchedRecord {
    /// Normalizes a wallet record entry of any shape.
    ///
    /// Entries without `plaintext` are presented whole; entries without `spent` count as
    /// unspent.
    pub fn normalize(entry: &Value) -> Self {
        let plaintext = match entry.get("plaintext") {
            Some(plaintext) if !plaintext.is_null() => coerce(plaintext),
            _ => coerce(entry),
        };
        FetchedRecord { plaintext, spent: is_spent(entry) }
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_spent(entry: &Value) -> bool { entry.get("spent").is_some_and(truthy) }

/// Selects and normalizes records for display.
///
/// Unspent records are preferred. If every record is spent the whole list is kept, so there is
/// always something to show when the wallet holds any records at all.
pub fn normalize_records(entries: &[Value]) -> Vec<FetchedRecord> {
    let unspent = entries
        .iter()
        .filter(|entry| !is_spent(entry))
        .collect::<Vec<_>>();
    let selected = if unspent.is_empty() { entries.iter().collect() } else { unspent };
    selected.into_iter().map(FetchedRecord::normalize).collect()
}

pub fn fetch_records<W: Wallet + ?Sized>(
    wallet: &W,
    program: &str,
) -> Result<Vec<FetchedRecord>, WalletError> {
    debug!("Requesting record plaintexts of {program}");
    let entries = wallet.record_plaintexts(program)?;
    let records = normalize_records(&entries);
    debug!("Wallet returned {} records of {program}, showing {}", entries.len(), records.len());
    Ok(records)
}
