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

use std::path::PathBuf;

use clap::ValueHint;
use coffee::{AmountPolicy, Config, ConfigError};

use crate::Command;

pub const COFFEE_CONFIG_ENV: &str = "COFFEE_CONFIG";
pub const COFFEE_API_ENV: &str = "COFFEE_API_URL";
pub const COFFEE_WALLET_ENV: &str = "COFFEE_WALLET_URL";
pub const COFFEE_NETWORK_ENV: &str = "COFFEE_NETWORK";

#[cfg(target_os = "linux")]
pub const COFFEE_CONFIG: &str = "~/.config/aleo-coffee/config.toml";
#[cfg(any(target_os = "freebsd", target_os = "openbsd", target_os = "netbsd"))]
pub const COFFEE_CONFIG: &str = "~/.config/aleo-coffee/config.toml";
#[cfg(target_os = "macos")]
pub const COFFEE_CONFIG: &str = "~/Library/Application Support/Aleo Coffee/config.toml";
#[cfg(target_os = "windows")]
pub const COFFEE_CONFIG: &str = "~\\AppData\\Local\\Aleo Coffee\\config.toml";
#[cfg(not(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "macos",
    target_os = "windows"
)))]
pub const COFFEE_CONFIG: &str = "config.toml";

/// Command-line arguments
#[derive(Parser)]
#[derive(Clone, Eq, PartialEq, Debug)]
#[command(author, version, about)]
pub struct Opts {
    /// Set verbosity level.
    ///
    /// Can be used multiple times to increase verbosity.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file.
    ///
    /// A missing file means default configuration.
    #[arg(
        short,
        long,
        global = true,
        default_value = COFFEE_CONFIG,
        env = COFFEE_CONFIG_ENV,
        value_hint = ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Mapping API base URL
    #[arg(
        long,
        global = true,
        env = COFFEE_API_ENV,
        value_hint = ValueHint::Url,
        value_name = "URL"
    )]
    pub api: Option<String>,

    /// Wallet bridge base URL
    #[arg(
        short,
        long,
        global = true,
        env = COFFEE_WALLET_ENV,
        value_hint = ValueHint::Url,
        value_name = "URL"
    )]
    pub wallet: Option<String>,

    /// Network tag to put into transactions
    #[arg(short, long, global = true, env = COFFEE_NETWORK_ENV)]
    pub network: Option<String>,

    /// Reject amounts not fitting the integer width of the contract parameter
    #[arg(long, global = true)]
    pub strict: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Opts {
    pub fn process(&mut self) {
        self.config =
            PathBuf::from(shellexpand::tilde(&self.config.display().to_string()).to_string());
    }

    /// Loads configuration file and applies command-line overrides on top of it.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(&self.config)?;
        if let Some(api) = &self.api {
            config.api_url = api.clone();
        }
        if let Some(wallet) = &self.wallet {
            config.wallet_url = wallet.clone();
        }
        if let Some(network) = &self.network {
            config.network = network.clone();
        }
        if self.strict {
            config.amount_policy = AmountPolicy::Strict;
        }
        Ok(config)
    }
}
