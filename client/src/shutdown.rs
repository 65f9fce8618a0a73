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

//! Shutdown coordination

use std::sync::{Arc, Mutex, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Why a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShutdownReason {
    /// A local termination signal (SIGINT, SIGTERM) or an external request
    Signal,
    /// The peer closed the connection in an orderly way
    PeerClosed,
    /// A fatal protocol or I/O error
    Fatal(String),
}

impl ShutdownReason {
    /// Process exit status for this reason: `0` for an orderly peer close,
    /// `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShutdownReason::PeerClosed => 0,
            ShutdownReason::Signal | ShutdownReason::Fatal(_) => 1,
        }
    }
}

impl std::fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownReason::Signal => write!(f, "termination requested"),
            ShutdownReason::PeerClosed => write!(f, "connection closed by peer"),
            ShutdownReason::Fatal(message) => write!(f, "fatal error: {}", message),
        }
    }
}

/// First-wins shutdown trigger shared by everything in a session.
///
/// The first [`ShutdownHandle::trigger`] records its reason and cancels the
/// session's token. Every later trigger is a no-op.
#[derive(Clone, Debug, Default)]
pub struct ShutdownHandle {
    token: CancellationToken,
    reason: Arc<Mutex<Option<ShutdownReason>>>,
}

impl ShutdownHandle {
    /// Creates an untriggered handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts shutdown for `reason`. Returns `false` if shutdown had already
    /// been triggered, in which case nothing changes.
    pub fn trigger(&self, reason: ShutdownReason) -> bool {
        {
            let mut slot = self.reason.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.is_some() {
                debug!("shutdown already in progress, ignoring {}", reason);
                return false;
            }
            debug!("shutdown triggered: {}", reason);
            *slot = Some(reason);
        }
        self.token.cancel();
        true
    }

    /// The reason recorded by the first trigger.
    pub fn reason(&self) -> Option<ShutdownReason> {
        self.reason
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Token the reader activities watch for cancellation.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

/// Completes on SIGINT or, on Unix, SIGTERM.
pub async fn termination_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", error);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", error);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => debug!("received SIGINT"),
        () = terminate => debug!("received SIGTERM"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_trigger_wins() {
        let handle = ShutdownHandle::new();
        assert!(!handle.token().is_cancelled());
        assert_eq!(handle.reason(), None);

        assert!(handle.trigger(ShutdownReason::PeerClosed));
        assert!(!handle.trigger(ShutdownReason::Signal));
        assert!(handle.token().is_cancelled());
        assert_eq!(handle.reason(), Some(ShutdownReason::PeerClosed));
    }

    #[test]
    fn test_clones_share_state() {
        let handle = ShutdownHandle::new();
        let other = handle.clone();
        other.trigger(ShutdownReason::Signal);
        assert!(handle.token().is_cancelled());
        assert_eq!(handle.reason(), Some(ShutdownReason::Signal));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShutdownReason::PeerClosed.exit_code(), 0);
        assert_eq!(ShutdownReason::Signal.exit_code(), 1);
        assert_eq!(ShutdownReason::Fatal("x".to_string()).exit_code(), 1);
    }

    #[tokio::test]
    async fn test_token_wakes_on_trigger() {
        let handle = ShutdownHandle::new();
        let token = handle.token();
        let waiter = tokio::spawn(async move { token.cancelled().await });
        handle.trigger(ShutdownReason::Signal);
        waiter.await.unwrap();
    }
}
