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

use coffee::Card;

#[derive(Subcommand, Clone, PartialEq, Eq, Debug, Display)]
pub enum Command {
    /// Buy coffee publicly, paying from the public balance
    #[display("buy-public")]
    BuyPublic {
        /// Number of coffees (u8)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Buy coffee privately, spending a credits.aleo record
    #[display("buy-private")]
    BuyPrivate {
        /// Record to spend: record text, `@FILE` to read it from a file or `-` for STDIN
        record: String,

        /// Number of coffees (u8)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Join two credits.aleo records into one
    #[display("join")]
    Join {
        /// First record: record text, `@FILE` or `-` for STDIN
        record1: String,

        /// Second record: record text, `@FILE` or `-` for STDIN
        record2: String,
    },

    /// Split a credits.aleo record in two
    #[display("split")]
    Split {
        /// Record to split: record text, `@FILE` or `-` for STDIN
        record: String,

        /// Amount to split off, in microcredits (u64)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Check how many coffees an address has bought
    #[display("check")]
    Check {
        /// Aleo address
        address: String,
    },

    /// Fetch plaintext records held by the wallet
    #[display("records")]
    Records {
        /// Program to list records of; the configured records program if omitted
        program: Option<String>,
    },

    /// Print out the effective configuration
    #[display("config")]
    Config {
        /// Save the effective configuration into the configuration file
        #[arg(long)]
        save: bool,
    },
}

impl Command {
    pub fn card(&self) -> Option<Card> {
        Some(match self {
            Command::BuyPublic { .. } => Card::BuyPublic,
            Command::BuyPrivate { .. } => Card::BuyPrivate,
            Command::Join { .. } => Card::JoinRecords,
            Command::Split { .. } => Card::SplitRecord,
            Command::Check { .. } => Card::CheckCoffee,
            Command::Records { .. } => Card::FetchRecords,
            Command::Config { .. } => return None,
        })
    }

    /// Whether the command needs a connected wallet.
    pub fn needs_wallet(&self) -> bool {
        matches!(self.card(), Some(card) if card != Card::CheckCoffee)
    }
}
