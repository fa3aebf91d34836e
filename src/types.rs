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

use crate::error::NormalizeError;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Signature algorithm of an account key.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algo {
    #[default]
    Secp256k1,
    Ed25519,
    Sr25519,
}

impl Algo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algo::Secp256k1 => "secp256k1",
            Algo::Ed25519 => "ed25519",
            Algo::Sr25519 => "sr25519",
        }
    }
}

impl Display for Algo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account as exposed by an offline signer.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    /// Bech32 address.
    pub address: String,
    pub pubkey: Vec<u8>,
    pub algo: Algo,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

/// An amino message. The value is kept as raw JSON since its layout depends on the message type.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct AminoMsg {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: serde_json::Value,
}

/// The amino JSON sign document, serialized with its canonical snake_case field names.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct StdSignDoc {
    pub chain_id: String,
    pub account_number: String,
    pub sequence: String,
    pub fee: StdFee,
    pub msgs: Vec<AminoMsg>,
    pub memo: String,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub type_: String,
    /// Base64 encoded key bytes.
    pub value: String,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: PubKey,
    /// Base64 encoded signature bytes.
    pub signature: String,
}

impl StdSignature {
    pub fn signature_bytes(&self) -> Result<Vec<u8>, NormalizeError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.signature)?)
    }

    pub fn pub_key_bytes(&self) -> Result<Vec<u8>, NormalizeError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.pub_key.value)?)
    }
}

/// The protobuf sign document used by direct signing.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDoc {
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    pub chain_id: String,
    pub account_number: u64,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct AminoSignResponse {
    /// The document that was signed, which may differ from the one sent if the wallet
    /// adjusted it (fees, memo).
    pub signed: StdSignDoc,
    pub signature: StdSignature,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct DirectSignResponse {
    pub signed: SignDoc,
    pub signature: StdSignature,
}
