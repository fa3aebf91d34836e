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

//! Reshaping of wallet payloads into the [`OfflineSigner`](crate::signer::OfflineSigner) contract.
//!
//! | wallet field                          | signer field              |
//! |---------------------------------------|---------------------------|
//! | extension `address`                   | `AccountData.address`     |
//! | extension `publicKey`                 | `AccountData.pubkey`      |
//! | relay `bech32Address`                 | `AccountData.address`     |
//! | relay `pubKey` (hex)                  | `AccountData.pubkey`      |
//! | extension `signed_doc`                | `signed`                  |
//! | extension `pub_key`, `signature`      | `signature`               |
//! | extension direct `account_number`     | `SignDoc.account_number`  |
//!
//! `AccountData.algo` is always `secp256k1`.

use crate::error::NormalizeError;
use crate::extension_provider::{
    ExtensionAccount, ExtensionSignAminoResponse, ExtensionSignDirectDoc,
    ExtensionSignDirectResponse,
};
use crate::relay_client::RelayAccount;
use crate::types::{
    AccountData, Algo, AminoSignResponse, DirectSignResponse, SignDoc, StdSignature,
};

/// Account payload as received from one of the two backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountPayload {
    Extension(ExtensionAccount),
    Relay(Vec<RelayAccount>),
}

impl AccountPayload {
    pub fn normalize(self) -> Result<Vec<AccountData>, NormalizeError> {
        let accounts = match self {
            AccountPayload::Extension(account) => vec![normalize_extension_account(account)],
            AccountPayload::Relay(accounts) => accounts
                .into_iter()
                .map(normalize_relay_account)
                .collect::<Result<Vec<_>, _>>()?,
        };

        if accounts.is_empty() {
            return Err(NormalizeError::NoAccounts);
        }

        if accounts.iter().any(|account| account.address.is_empty()) {
            return Err(NormalizeError::EmptyAddress);
        }

        Ok(accounts)
    }
}

/// Amino sign payload as received from one of the two backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AminoPayload {
    Extension(ExtensionSignAminoResponse),
    /// The mobile wallet answers with a list; only the first entry is meaningful.
    Relay(Vec<AminoSignResponse>),
}

impl AminoPayload {
    pub fn normalize(self) -> Result<AminoSignResponse, NormalizeError> {
        let response = match self {
            AminoPayload::Extension(response) => AminoSignResponse {
                signed: response.signed_doc,
                signature: StdSignature {
                    pub_key: response.pub_key,
                    signature: response.signature,
                },
            },
            AminoPayload::Relay(responses) => responses
                .into_iter()
                .next()
                .ok_or(NormalizeError::MissingSignResponse)?,
        };

        ensure_signature(&response.signature)?;

        Ok(response)
    }
}

pub fn normalize_direct_response(
    response: ExtensionSignDirectResponse,
) -> Result<DirectSignResponse, NormalizeError> {
    let signature = StdSignature {
        pub_key: response.pub_key,
        signature: response.signature,
    };

    ensure_signature(&signature)?;

    Ok(DirectSignResponse {
        signed: from_extension_direct_doc(response.signed_doc)?,
        signature,
    })
}

pub fn to_extension_direct_doc(doc: &SignDoc) -> ExtensionSignDirectDoc {
    ExtensionSignDirectDoc {
        account_number: doc.account_number.to_string(),
        auth_info_bytes: doc.auth_info_bytes.clone(),
        body_bytes: doc.body_bytes.clone(),
        chain_id: doc.chain_id.clone(),
    }
}

pub fn from_extension_direct_doc(doc: ExtensionSignDirectDoc) -> Result<SignDoc, NormalizeError> {
    let account_number = doc.account_number.parse::<u64>().map_err(|_| {
        NormalizeError::InvalidAccountNumber {
            account_number: doc.account_number.clone(),
        }
    })?;

    Ok(SignDoc {
        body_bytes: doc.body_bytes,
        auth_info_bytes: doc.auth_info_bytes,
        chain_id: doc.chain_id,
        account_number,
    })
}

fn normalize_extension_account(account: ExtensionAccount) -> AccountData {
    AccountData {
        address: account.address,
        pubkey: account.public_key,
        algo: Algo::Secp256k1,
    }
}

fn normalize_relay_account(account: RelayAccount) -> Result<AccountData, NormalizeError> {
    let pubkey =
        hex::decode(&account.pub_key).map_err(|err| NormalizeError::InvalidPublicKey {
            address: account.bech32_address.clone(),
            reason: err.to_string(),
        })?;

    Ok(AccountData {
        address: account.bech32_address,
        pubkey,
        algo: Algo::Secp256k1,
    })
}

fn ensure_signature(signature: &StdSignature) -> Result<(), NormalizeError> {
    if signature.signature_bytes()?.is_empty() {
        return Err(NormalizeError::EmptySignature);
    }

    Ok(())
}
