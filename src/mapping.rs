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

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::{QueryError, COFFEE_MAPPING, COFFEE_ZERO};

/// Read-only access to public contract mappings.
pub trait MappingQuery {
    /// Looks up `mapping[key]` of a program.
    ///
    /// Returns `None` when the entry is not set.
    fn get_value(&self, program: &str, mapping: &str, key: &str)
        -> Result<Option<Value>, QueryError>;
}

/// Mapping lookups against an Aleoscan-compatible indexer API.
pub struct AleoscanClient {
    url: String,
    client: Client,
}

impl AleoscanClient {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, QueryError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(AleoscanClient::with_client(url, builder.build()?))
    }

    /// Uses a preconfigured HTTP client, e.g. one with custom TLS roots or proxy settings.
    pub fn with_client(url: &str, client: Client) -> Self {
        AleoscanClient { url: url.trim_end_matches('/').to_owned(), client }
    }

    pub fn url(&self) -> &str { &self.url }
}

impl MappingQuery for AleoscanClient {
    fn get_value(
        &self,
        program: &str,
        mapping: &str,
        key: &str,
    ) -> Result<Option<Value>, QueryError> {
        let url = format!("{}/mapping/get_value/{program}/{mapping}/{key}", self.url);
        debug!("Querying mapping value from {url}");
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(QueryError::Status(status.as_u16()));
        }
        let body: Value = serde_json::from_str(&resp.text()?)?;
        trace!("Mapping API response: {body}");
        Ok(extract_value(&body))
    }
}

/// Extracts the `value` field of a mapping API response body.
pub fn extract_value(body: &Value) -> Option<Value> {
    body.get("value").filter(|value| !value.is_null()).cloned()
}

/// Presents a mapping value, treating an unset entry as the zero literal of the value type.
pub fn render_value(value: Option<Value>, zero: &str) -> String {
    match value {
        None => zero.to_owned(),
        Some(Value::String(value)) => value,
        Some(other) => other.to_string(),
    }
}

/// Number of coffees bought by an address, as a `u8` literal.
pub fn coffee_total<Q: MappingQuery + ?Sized>(
    query: &Q,
    program: &str,
    address: &str,
) -> Result<String, QueryError> {
    let value = query.get_value(program, COFFEE_MAPPING, address)?;
    Ok(render_value(value, COFFEE_ZERO))
}
