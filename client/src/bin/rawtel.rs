//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! `rawtel HOST PORT`
//!
//! Connects to a Telnet server and hands the terminal over to it until the
//! server closes the connection or the user interrupts.

use clap::Parser;
use rawtel_client::{
    ClientConfig, InputMode, PolicyKind, Session, SessionOutcome, connect, termination_signal,
};
use rawtel_terminal::StdinTerminal;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Minimal raw-mode Telnet client
#[derive(Parser, Debug)]
#[command(name = "rawtel", version, about)]
struct Args {
    /// Host name or address of the server
    host: String,

    /// TCP port of the server
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Leave the terminal in line mode and send whole lines
    #[arg(long)]
    line_mode: bool,

    /// How to answer option negotiations (reciprocating or refusing)
    #[arg(long, value_name = "POLICY", default_value_t = PolicyKind::Reciprocating)]
    policy: PolicyKind,

    /// Option code to leave unanswered, may be repeated
    #[arg(long = "ignore-option", value_name = "CODE")]
    ignore_options: Vec<u8>,

    /// Size of the network and keyboard read buffers
    #[arg(long, value_name = "BYTES", default_value_t = 1024)]
    buffer_size: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value_t = Level::WARN)]
    log_level: Level,
}

impl Args {
    fn into_config(self) -> ClientConfig {
        let mode = if self.line_mode {
            InputMode::Line
        } else {
            InputMode::Character
        };
        self.ignore_options.into_iter().fold(
            ClientConfig::new(self.host, self.port)
                .with_input_mode(mode)
                .with_policy(self.policy)
                .with_buffer_size(self.buffer_size),
            ClientConfig::with_ignored_option,
        )
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the session on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("rawtel: failed to start runtime: {error}");
            return ExitCode::FAILURE;
        }
    };

    let config = args.into_config();
    let result = runtime.block_on(run(config));

    // The stdin reader thread blocks in read(2) and cannot be joined.
    runtime.shutdown_background();

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(error) if error.is_setup_error() => {
            eprintln!("rawtel: {error}");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("rawtel: connection aborted: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ClientConfig) -> rawtel_client::Result<SessionOutcome> {
    let stream = connect(&config).await?;
    Session::new(
        config,
        stream,
        tokio::io::stdin(),
        tokio::io::stdout(),
        StdinTerminal::new(),
    )
    .run(termination_signal())
    .await
}
