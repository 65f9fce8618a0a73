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

//! # Rawtel Telnet Client
//!
//! A minimal raw-mode Telnet client. It connects to a host, forwards keyboard
//! input verbatim, shows everything the server sends and answers every option
//! negotiation according to a [`NegotiationPolicy`](rawtel_telnetcodec::NegotiationPolicy).
//!
//! ## Lifecycle
//!
//! 1. [`connect`] opens the TCP connection described by a [`ClientConfig`].
//! 2. [`Session::new`] wraps the connection, keyboard, screen and terminal.
//! 3. [`Session::run`] switches the terminal to raw mode (character input only),
//!    runs the network reader and the keyboard reader concurrently and waits
//!    for the first shutdown trigger.
//! 4. On the way out the terminal is restored exactly once and the connection
//!    is closed, whatever ended the session.
//!
//! ## Example
//!
//! ```no_run
//! use rawtel_client::{ClientConfig, Session, connect, termination_signal};
//! use rawtel_terminal::StdinTerminal;
//!
//! # async fn example() -> rawtel_client::Result<()> {
//! let config = ClientConfig::new("localhost", 23);
//! let stream = connect(&config).await?;
//! let session = Session::new(
//!     config,
//!     stream,
//!     tokio::io::stdin(),
//!     tokio::io::stdout(),
//!     StdinTerminal::new(),
//! );
//! let outcome = session.run(termination_signal()).await?;
//! println!("session ended: {}", outcome.reason);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod session;
mod shutdown;
mod writer;

pub use client::connect;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::{Session, SessionOutcome};
pub use shutdown::{ShutdownHandle, ShutdownReason, termination_signal};
pub use writer::SharedWriter;

pub use rawtel_telnetcodec::{PolicyKind, TelnetOption};
pub use rawtel_terminal::InputMode;
