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

//! Client configuration

use crate::{ClientError, Result};
use rawtel_telnetcodec::{NegotiationPolicy, PolicyKind, TelnetOption};
use rawtel_terminal::InputMode;
use std::time::Duration;

/// Telnet client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Line or character-at-a-time keyboard input
    pub input_mode: InputMode,

    /// How negotiation requests are answered
    pub policy: PolicyKind,

    /// Options whose negotiation commands are never answered
    pub ignored_options: Vec<TelnetOption>,

    /// Size of a single network read
    pub buffer_size: usize,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// How long shutdown waits for the reader activities before aborting them
    pub shutdown_grace: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 23,
            input_mode: InputMode::Character,
            policy: PolicyKind::Reciprocating,
            ignored_options: Vec::new(),
            buffer_size: 1024,
            connect_timeout: Duration::from_secs(10),
            shutdown_grace: Duration::from_millis(500),
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration with the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the keyboard input mode
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    /// Set the negotiation policy
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Never answer negotiation for `option`
    pub fn with_ignored_option(mut self, option: impl Into<TelnetOption>) -> Self {
        let option = TelnetOption::from_u8(option.into().to_u8());
        if !self.ignored_options.contains(&option) {
            self.ignored_options.push(option);
        }
        self
    }

    /// Set the network read size
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the shutdown grace period
    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the configured negotiation policy
    pub fn build_policy(&self) -> Box<dyn NegotiationPolicy> {
        self.policy.build(self.ignored_options.iter().copied())
    }

    /// Checks the configuration for values a session cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ClientError::InvalidArgument("host must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ClientError::InvalidArgument("port must be greater than 0".to_string()));
        }

        if self.buffer_size == 0 {
            return Err(ClientError::InvalidArgument(
                "buffer_size must be greater than 0".to_string(),
            ));
        }

        if self.connect_timeout.is_zero() {
            return Err(ClientError::InvalidArgument(
                "connect_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
