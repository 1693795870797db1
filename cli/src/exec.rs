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
use std::io::{self, Read};

use amplify::IoError;
use coffee::{
    AleoscanClient, BridgeWallet, Config, ConfigError, ConnectionContext, FlowError, Outcome,
    Panel, QueryError, ValidationError, WalletError, FIELD_ADDRESS, FIELD_AMOUNT, FIELD_PROGRAM,
    FIELD_RECORD, FIELD_RECORD_A, FIELD_RECORD_B,
};

use crate::{Command, Opts};

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum ExecError {
    #[from]
    #[from(io::Error)]
    Io(IoError),

    #[from]
    Config(ConfigError),

    #[from]
    Query(QueryError),

    #[from]
    Wallet(WalletError),

    #[from]
    #[from(ValidationError)]
    Flow(FlowError),

    #[from]
    Yaml(serde_yaml::Error),
}

impl Opts {
    pub fn exec(&self) -> Result<(), ExecError> {
        let config = self.config()?;
        let Some(card) = self.command.card() else {
            return self.exec_config(&config);
        };

        let connection = if self.command.needs_wallet() {
            connect(&config)
        } else {
            ConnectionContext::disconnected()
        };
        let query = AleoscanClient::new(&config.api_url, config.timeout())?;
        let mut panel = Panel::new(connection, query, &config);

        match &self.command {
            Command::BuyPublic { amount } => {
                panel.set_field(card, FIELD_AMOUNT, amount)?;
            }
            Command::BuyPrivate { record, amount } => {
                panel.set_field(card, FIELD_RECORD, read_record(record)?)?;
                panel.set_field(card, FIELD_AMOUNT, amount)?;
            }
            Command::Join { record1, record2 } => {
                panel.set_field(card, FIELD_RECORD_A, read_record(record1)?)?;
                panel.set_field(card, FIELD_RECORD_B, read_record(record2)?)?;
            }
            Command::Split { record, amount } => {
                panel.set_field(card, FIELD_RECORD, read_record(record)?)?;
                panel.set_field(card, FIELD_AMOUNT, amount)?;
            }
            Command::Check { address } => {
                panel.set_field(card, FIELD_ADDRESS, address)?;
            }
            Command::Records { program: Some(program) } => {
                panel.set_field(card, FIELD_PROGRAM, program)?;
            }
            Command::Records { program: None } | Command::Config { .. } => {}
        }

        match panel.submit(card) {
            Ok(outcome) => report(&outcome)?,
            Err(err) => {
                eprintln!("{}", card.alert(&err));
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn exec_config(&self, config: &Config) -> Result<(), ExecError> {
        print!("{}", serde_yaml::to_string(config)?);
        if matches!(self.command, Command::Config { save: true }) {
            config.store(&self.config)?;
            eprintln!("Configuration saved to '{}'", self.config.display());
        }
        Ok(())
    }
}

fn connect(config: &Config) -> ConnectionContext {
    match BridgeWallet::new(&config.wallet_url, config.timeout()).and_then(BridgeWallet::connect) {
        Ok(connection) => connection,
        Err(err) => {
            warn!("Unable to reach wallet bridge at {}: {err}", config.wallet_url);
            ConnectionContext::disconnected()
        }
    }
}

fn read_record(arg: &str) -> Result<String, ExecError> {
    if arg == "-" {
        let mut record = String::new();
        io::stdin().read_to_string(&mut record)?;
        return Ok(record);
    }
    if let Some(path) = arg.strip_prefix('@') {
        let path = shellexpand::tilde(path);
        return Ok(fs::read_to_string(&*path)?);
    }
    Ok(arg.to_owned())
}

fn report(outcome: &Outcome) -> Result<(), ExecError> {
    match outcome {
        Outcome::Submitted(_) | Outcome::CoffeeTotal(_) => println!("{outcome}"),
        Outcome::Records(records) if records.is_empty() => eprintln!("No records found"),
        Outcome::Records(records) => {
            for (no, record) in records.iter().enumerate() {
                println!("---");
                println!("# Record #{}{}", no + 1, if record.spent { " (spent)" } else { "" });
                print!("{}", serde_yaml::to_string(record)?);
            }
        }
    }
    Ok(())
}
