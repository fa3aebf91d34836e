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

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure surfaced by the signers and the resolver.
///
/// The set of variants is closed: callers are expected to branch on
/// [`CosmostationError::kind`] and treat the wrapped source as opaque detail.
#[derive(Debug, Error)]
pub enum CosmostationError {
    #[error("Cosmostation extension is not installed or not available: {0}")]
    ExtensionInstall(#[source] BoxError),

    #[error("Cannot connect to the Cosmostation mobile wallet: {0}")]
    MobileConnect(#[source] BoxError),

    #[error("Cannot fetch accounts: {0}")]
    GetAccount(#[source] BoxError),

    #[error("Signing failed: {0}")]
    Sign(#[source] BoxError),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ExtensionInstall,
    MobileConnect,
    GetAccount,
    Sign,
}

impl CosmostationError {
    pub fn extension_install<E: Into<BoxError>>(err: E) -> Self {
        Self::ExtensionInstall(err.into())
    }

    pub fn mobile_connect<E: Into<BoxError>>(err: E) -> Self {
        Self::MobileConnect(err.into())
    }

    pub fn get_account<E: Into<BoxError>>(err: E) -> Self {
        Self::GetAccount(err.into())
    }

    pub fn sign<E: Into<BoxError>>(err: E) -> Self {
        Self::Sign(err.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ExtensionInstall(_) => ErrorKind::ExtensionInstall,
            Self::MobileConnect(_) => ErrorKind::MobileConnect,
            Self::GetAccount(_) => ErrorKind::GetAccount,
            Self::Sign(_) => ErrorKind::Sign,
        }
    }

    /// The wrapped cause, for callers that want to inspect it further.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            Self::ExtensionInstall(err)
            | Self::MobileConnect(err)
            | Self::GetAccount(err)
            | Self::Sign(err) => err.as_ref(),
        }
    }
}

/// Failures while reshaping a wallet payload into the signer contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("The wallet returned no accounts")]
    NoAccounts,

    #[error("The wallet returned an account with an empty address")]
    EmptyAddress,

    #[error("Invalid hex public key for account {address}: {reason}")]
    InvalidPublicKey { address: String, reason: String },

    #[error("Invalid account number {account_number}")]
    InvalidAccountNumber { account_number: String },

    #[error("The wallet returned no sign response")]
    MissingSignResponse,

    #[error("The wallet returned an empty signature")]
    EmptySignature,

    #[error("BASE64 deserialization error: {0}")]
    Base64Deserialization(#[from] base64::DecodeError),
}

/// Failures specific to the relay session, before classification.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Unexpected result for {method}: {source}")]
    UnexpectedResult {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    JSONSerialization(#[from] serde_json::Error),

    #[error("Direct signing is not supported over the mobile relay")]
    DirectSignUnsupported,

    #[error("The relay dropped the session before the connect event")]
    HandshakeDropped,

    #[error("The wallet rejected the session: {message}")]
    SessionRejected { message: String },
}
