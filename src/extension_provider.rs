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

use crate::types::{PubKey, StdSignDoc};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Account as returned by the extension's `getAccount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionAccount {
    pub address: String,
    pub public_key: Vec<u8>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_ledger: bool,
    #[serde(default)]
    pub is_ethermint: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSignAminoResponse {
    pub signature: String,
    pub pub_key: PubKey,
    pub signed_doc: StdSignDoc,
}

/// Direct sign document in the extension's own layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSignDirectDoc {
    pub account_number: String,
    pub auth_info_bytes: Vec<u8>,
    pub body_bytes: Vec<u8>,
    pub chain_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSignDirectResponse {
    pub signature: String,
    pub pub_key: PubKey,
    pub signed_doc: ExtensionSignDirectDoc,
}

/// Entry point to the locally injected wallet agent.
///
/// `provider` resolves once the agent has been found in the host runtime. How the agent
/// is discovered (polling an injected global, a native bridge, ...) is up to the
/// implementation; any error it returns is reported as an extension install failure.
#[async_trait]
pub trait ExtensionAgent: Send + Sync {
    type Provider: ExtensionProvider;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn provider(&self) -> Result<Self::Provider, Self::Error>;
}

/// Provider handle exposed by the extension for Cosmos chains.
#[async_trait]
pub trait ExtensionProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_account(&self, chain_id: &str) -> Result<ExtensionAccount, Self::Error>;

    async fn sign_amino(
        &self,
        chain_id: &str,
        doc: &StdSignDoc,
    ) -> Result<ExtensionSignAminoResponse, Self::Error>;

    async fn sign_direct(
        &self,
        chain_id: &str,
        doc: &ExtensionSignDirectDoc,
    ) -> Result<ExtensionSignDirectResponse, Self::Error>;
}
