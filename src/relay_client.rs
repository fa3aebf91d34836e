// Copyright 2025 Quentin Diebold
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

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::jsonrpc::JsonRpcRequest;
use async_trait::async_trait;
use futures::channel::oneshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account as returned by the mobile wallet for `cosmostation_wc_accounts_v1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayAccount {
    pub bech32_address: String,
    /// Hex encoded public key.
    pub pub_key: String,
    #[serde(default)]
    pub algo: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_nano_ledger: bool,
}

/// Creates sessions with a remote wallet over a publish/subscribe bridge.
///
/// The bridge protocol itself (topic handshake, encryption, QR code display) belongs to the
/// implementation. `create_session` must only resolve once the wallet approved the session.
/// Event-driven relay libraries can use [`connect_handshake`] to turn their connect callback
/// into the returned future.
#[async_trait]
pub trait RelayConnector: Send + Sync {
    type Session: RelaySession;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Drops whatever session a previous connection left behind on this connector.
    async fn kill_stale_session(&self) -> Result<(), Self::Error>;

    async fn create_session(&self, config: &RelayConfig) -> Result<Self::Session, Self::Error>;
}

/// An established session with the mobile wallet.
#[async_trait]
pub trait RelaySession: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends one request and resolves with the `result` member of the matching response.
    async fn send_custom_request(&self, request: JsonRpcRequest) -> Result<Value, Self::Error>;

    async fn kill_session(&self) -> Result<(), Self::Error>;
}

/// Sending half of a connect handshake, fired from the relay's connect callback.
#[derive(Debug)]
pub struct ConnectNotifier<S> {
    sender: oneshot::Sender<Result<S, RelayError>>,
}

impl<S> ConnectNotifier<S> {
    pub fn connected(self, session: S) {
        // The waiting side may have given up already.
        let _ = self.sender.send(Ok(session));
    }

    pub fn rejected<M: ToString>(self, message: M) {
        let _ = self.sender.send(Err(RelayError::SessionRejected {
            message: message.to_string(),
        }));
    }
}

/// Receiving half of a connect handshake.
#[derive(Debug)]
pub struct ConnectHandshake<S> {
    receiver: oneshot::Receiver<Result<S, RelayError>>,
}

impl<S> ConnectHandshake<S> {
    pub async fn wait(self) -> Result<S, RelayError> {
        match self.receiver.await {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(RelayError::HandshakeDropped),
        }
    }
}

pub fn connect_handshake<S>() -> (ConnectNotifier<S>, ConnectHandshake<S>) {
    let (sender, receiver) = oneshot::channel();

    (ConnectNotifier { sender }, ConnectHandshake { receiver })
}
