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

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde_crate::{Deserialize, Serialize};

use crate::{
    AmountPolicy, ConfigError, TxParams, CREDITS_PROGRAM, DEFAULT_API, DEFAULT_BRIDGE, DEFAULT_FEE,
    TESTNET_BETA, WORKSHOP_PROGRAM,
};

/// Client configuration.
///
/// Every field has a default, so a configuration file may list only the values it changes, and
/// a missing file is the same as an empty one.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase", default)]
pub struct Config {
    /// Network tag put into every transaction.
    pub network: String,
    /// Coffee shop contract program id.
    pub program: String,
    /// Program whose records are listed unless another one is asked for.
    pub records_program: String,
    /// Transaction fee in microcredits.
    pub fee: u64,
    /// Pay fees from the private balance.
    pub fee_private: bool,
    /// Base URL of the mapping API.
    pub api_url: String,
    /// Base URL of the wallet bridge.
    pub wallet_url: String,
    pub amount_policy: AmountPolicy,
    /// Timeout for HTTP requests; none by default.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network: TESTNET_BETA.to_owned(),
            program: WORKSHOP_PROGRAM.to_owned(),
            records_program: CREDITS_PROGRAM.to_owned(),
            fee: DEFAULT_FEE,
            fee_private: false,
            api_url: DEFAULT_API.to_owned(),
            wallet_url: DEFAULT_BRIDGE.to_owned(),
            amount_policy: AmountPolicy::Permissive,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No configuration file at '{}', using defaults", path.display());
            return Ok(Config::default());
        }
        debug!("Loading configuration from '{}'", path.display());
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    pub fn store(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    pub fn tx_params(&self) -> TxParams {
        TxParams {
            network: self.network.clone(),
            program: self.program.clone(),
            fee: self.fee,
            fee_private: self.fee_private,
        }
    }

    pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tx_params(), TxParams::default());
        assert_eq!(config.records_program, "credits.aleo");
        assert_eq!(config.api_url, "https://api.aleoscan.io/v3");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fee = 250000\namountPolicy = \"strict\"\ntimeoutSecs = 30\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.fee, 250_000);
        assert_eq!(config.amount_policy, AmountPolicy::Strict);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.network, "testnetbeta");
    }

    #[test]
    fn store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config { fee_private: true, ..Config::default() };
        config.store(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fee = \"lots\"").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
