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

//! Client error types

use rawtel_telnetcodec::ProtocolError;
use thiserror::Error;

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// I/O error on the network stream, the keyboard or the screen
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer broke command framing
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Connecting did not finish within the configured timeout
    #[error("Connection to {0} timed out")]
    ConnectionTimeout(String),

    /// Address resolution or connection failed
    #[error("Failed to connect to {address}: {source}")]
    Connect {
        /// Address that was dialled
        address: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// A reader activity panicked or was torn down unexpectedly
    #[error("Session task failed: {0}")]
    Task(String),

    /// Bad configuration or command line
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ClientError {
    /// Whether this error happened before a session started.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            ClientError::ConnectionTimeout(_)
                | ClientError::Connect { .. }
                | ClientError::InvalidArgument(_)
        )
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(error: tokio::task::JoinError) -> Self {
        ClientError::Task(error.to_string())
    }
}
