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

use async_trait::async_trait;
use base64::Engine;
use cosmostation_signer_rs::config::RelayConfig;
use cosmostation_signer_rs::error::RelayError;
use cosmostation_signer_rs::extension_provider::{
    ExtensionAccount, ExtensionAgent, ExtensionProvider, ExtensionSignAminoResponse,
    ExtensionSignDirectDoc, ExtensionSignDirectResponse,
};
use cosmostation_signer_rs::jsonrpc::JsonRpcRequest;
use cosmostation_signer_rs::relay_client::{RelayConnector, RelaySession, connect_handshake};
use cosmostation_signer_rs::types::{AminoMsg, Coin, PubKey, StdFee, StdSignDoc};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub const CHAIN_ID: &str = "cosmoshub-4";
pub const ADDRESS: &str = "cosmos1abc";
pub const SIGNATURE_BYTES: [u8; 4] = [9, 8, 7, 6];
pub const PUB_KEY_BYTES: [u8; 3] = [1, 2, 3];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MockError(pub String);

pub fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

pub fn pub_key() -> PubKey {
    PubKey {
        type_: "tendermint/PubKeySecp256k1".to_string(),
        value: encode(&PUB_KEY_BYTES),
    }
}

pub fn sign_doc() -> StdSignDoc {
    StdSignDoc {
        chain_id: CHAIN_ID.to_string(),
        account_number: "7".to_string(),
        sequence: "3".to_string(),
        fee: StdFee {
            amount: vec![Coin {
                denom: "uatom".to_string(),
                amount: "5000".to_string(),
            }],
            gas: "200000".to_string(),
            granter: None,
            payer: None,
        },
        msgs: vec![AminoMsg {
            type_: "cosmos-sdk/MsgSend".to_string(),
            value: json!({
                "from_address": ADDRESS,
                "to_address": "cosmos1xyz",
                "amount": [{"denom": "uatom", "amount": "1"}],
            }),
        }],
        memo: "".to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockExtensionAgent {
    provider: Option<MockExtensionProvider>,
}

impl MockExtensionAgent {
    pub fn installed(provider: MockExtensionProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExtensionAgent for MockExtensionAgent {
    type Provider = MockExtensionProvider;
    type Error = MockError;

    async fn provider(&self) -> Result<Self::Provider, Self::Error> {
        self.provider
            .clone()
            .ok_or_else(|| MockError("window.cosmostation is undefined".to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct MockExtensionProvider {
    pub account: Result<ExtensionAccount, MockError>,
    pub sign_error: Option<MockError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockExtensionProvider {
    fn default() -> Self {
        Self {
            account: Ok(ExtensionAccount {
                address: ADDRESS.to_string(),
                public_key: PUB_KEY_BYTES.to_vec(),
                name: "main".to_string(),
                is_ledger: false,
                is_ethermint: false,
            }),
            sign_error: None,
            calls: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl MockExtensionProvider {
    pub fn failing_signatures(message: &str) -> Self {
        Self {
            sign_error: Some(MockError(message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ExtensionProvider for MockExtensionProvider {
    type Error = MockError;

    async fn get_account(&self, chain_id: &str) -> Result<ExtensionAccount, Self::Error> {
        self.record(format!("get_account:{chain_id}"));

        self.account.clone()
    }

    async fn sign_amino(
        &self,
        chain_id: &str,
        doc: &StdSignDoc,
    ) -> Result<ExtensionSignAminoResponse, Self::Error> {
        self.record(format!("sign_amino:{chain_id}"));

        if let Some(err) = &self.sign_error {
            return Err(err.clone());
        }

        Ok(ExtensionSignAminoResponse {
            signature: encode(&SIGNATURE_BYTES),
            pub_key: pub_key(),
            signed_doc: doc.clone(),
        })
    }

    async fn sign_direct(
        &self,
        chain_id: &str,
        doc: &ExtensionSignDirectDoc,
    ) -> Result<ExtensionSignDirectResponse, Self::Error> {
        self.record(format!("sign_direct:{chain_id}:{}", doc.account_number));

        if let Some(err) = &self.sign_error {
            return Err(err.clone());
        }

        Ok(ExtensionSignDirectResponse {
            signature: encode(&SIGNATURE_BYTES),
            pub_key: pub_key(),
            signed_doc: doc.clone(),
        })
    }
}

/// How the mock wallet reacts to a session proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Approve,
    Reject,
    Drop,
}

#[derive(Debug, Clone)]
pub struct MockRelayConnector {
    outcome: SessionOutcome,
    fail_stale_kill: bool,
    handlers: Arc<HashMap<String, Result<Value, MockError>>>,
    pub requests: Arc<Mutex<Vec<JsonRpcRequest>>>,
    pub configs: Arc<Mutex<Vec<RelayConfig>>>,
    pub stale_kills: Arc<AtomicUsize>,
    pub session_kills: Arc<AtomicUsize>,
}

impl MockRelayConnector {
    pub fn new(outcome: SessionOutcome) -> Self {
        Self {
            outcome,
            fail_stale_kill: false,
            handlers: Arc::new(HashMap::new()),
            requests: Arc::new(Mutex::new(vec![])),
            configs: Arc::new(Mutex::new(vec![])),
            stale_kills: Arc::new(AtomicUsize::new(0)),
            session_kills: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_handler(mut self, method: &str, result: Result<Value, MockError>) -> Self {
        Arc::make_mut(&mut self.handlers).insert(method.to_string(), result);
        self
    }

    pub fn with_failing_stale_kill(mut self) -> Self {
        self.fail_stale_kill = true;
        self
    }

    pub fn requests(&self) -> Vec<JsonRpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn configs(&self) -> Vec<RelayConfig> {
        self.configs.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayConnector for MockRelayConnector {
    type Session = MockRelaySession;
    type Error = RelayError;

    async fn kill_stale_session(&self) -> Result<(), Self::Error> {
        self.stale_kills.fetch_add(1, Ordering::SeqCst);

        if self.fail_stale_kill {
            return Err(RelayError::SessionRejected {
                message: "No session to kill".to_string(),
            });
        }

        Ok(())
    }

    async fn create_session(&self, config: &RelayConfig) -> Result<Self::Session, Self::Error> {
        self.configs.lock().unwrap().push(config.clone());

        let (notifier, handshake) = connect_handshake();
        let session = MockRelaySession {
            handlers: self.handlers.clone(),
            requests: self.requests.clone(),
            session_kills: self.session_kills.clone(),
        };
        let outcome = self.outcome;

        // The wallet answers from the relay's event loop, not from the caller's task.
        tokio::spawn(async move {
            match outcome {
                SessionOutcome::Approve => notifier.connected(session),
                SessionOutcome::Reject => notifier.rejected("User rejected the session"),
                SessionOutcome::Drop => drop(notifier),
            }
        });

        handshake.wait().await
    }
}

#[derive(Debug)]
pub struct MockRelaySession {
    handlers: Arc<HashMap<String, Result<Value, MockError>>>,
    requests: Arc<Mutex<Vec<JsonRpcRequest>>>,
    session_kills: Arc<AtomicUsize>,
}

#[async_trait]
impl RelaySession for MockRelaySession {
    type Error = MockError;

    async fn send_custom_request(&self, request: JsonRpcRequest) -> Result<Value, Self::Error> {
        let method = request.method.clone();
        self.requests.lock().unwrap().push(request);

        self.handlers
            .get(&method)
            .cloned()
            .unwrap_or_else(|| Err(MockError(format!("Unsupported method {method}"))))
    }

    async fn kill_session(&self) -> Result<(), Self::Error> {
        self.session_kills.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }
}
