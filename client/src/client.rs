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

//! Connection establishment

use crate::{ClientConfig, ClientError, Result};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

/// Resolves the configured host and opens a TCP connection to it.
///
/// Fails with [`ClientError::ConnectionTimeout`] if resolution and connection
/// together take longer than [`ClientConfig::connect_timeout`].
pub async fn connect(config: &ClientConfig) -> Result<TcpStream> {
    config.validate()?;
    let address = config.address();
    info!("Connecting to {} (host {}, port {})...", address, config.host, config.port);

    let stream = match timeout(config.connect_timeout, TcpStream::connect(&address)).await {
        Ok(Ok(stream)) => stream,
        Ok(Err(source)) => return Err(ClientError::Connect { address, source }),
        Err(_) => return Err(ClientError::ConnectionTimeout(address)),
    };

    // Keystrokes go out one at a time in character mode.
    if let Err(error) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", error);
    }

    info!("Connected to {}", stream.peer_addr()?);
    Ok(stream)
}
