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

use crate::config::{ACCOUNTS_METHOD, SIGN_TX_METHOD};
use crate::error::{BoxError, CosmostationError, RelayError};
use crate::jsonrpc::JsonRpcRequest;
use crate::normalize::{AccountPayload, AminoPayload};
use crate::relay_client::{RelayAccount, RelaySession};
use crate::signer::OfflineSigner;
use crate::types::{AccountData, AminoSignResponse, DirectSignResponse, SignDoc, StdSignDoc};
use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Offline signer backed by a mobile wallet session.
///
/// The session is owned by the signer; dropping the signer drops the session handle and
/// [`MobileSigner::disconnect`] tears it down explicitly.
#[derive(Debug)]
pub struct MobileSigner<Session>
where
    Session: RelaySession,
{
    session: Session,
    chain_id: String,
}

impl<Session> MobileSigner<Session>
where
    Session: RelaySession,
{
    pub fn new<S: ToString>(session: Session, chain_id: S) -> Self {
        MobileSigner {
            session,
            chain_id: chain_id.to_string(),
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub async fn disconnect(self) -> Result<(), Session::Error> {
        debug!("Killing mobile wallet session for chain {}", self.chain_id);

        self.session.kill_session().await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RelayRequestError<Session::Error>> {
        let request = JsonRpcRequest::new(method, params);
        debug!("Sending {} request {} over the relay", method, request.id);

        let result = self
            .session
            .send_custom_request(request)
            .await
            .map_err(RelayRequestError::Session)?;

        serde_json::from_value(result).map_err(|source| {
            RelayRequestError::Relay(RelayError::UnexpectedResult {
                method: method.to_string(),
                source,
            })
        })
    }
}

enum RelayRequestError<E> {
    Session(E),
    Relay(RelayError),
}

impl<E> RelayRequestError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn classify(self, classify: fn(BoxError) -> CosmostationError) -> CosmostationError {
        let err = match self {
            RelayRequestError::Session(err) => BoxError::from(err),
            RelayRequestError::Relay(err) => BoxError::from(err),
        };
        warn!("Mobile wallet request failed: {err}");

        classify(err)
    }
}

#[async_trait]
impl<Session> OfflineSigner for MobileSigner<Session>
where
    Session: RelaySession,
{
    async fn get_accounts(&self) -> Result<Vec<AccountData>, CosmostationError> {
        let accounts: Vec<RelayAccount> = self
            .request(ACCOUNTS_METHOD, vec![json!(self.chain_id)])
            .await
            .map_err(|err| err.classify(CosmostationError::GetAccount))?;

        let accounts = AccountPayload::Relay(accounts).normalize().map_err(|err| {
            warn!("Mobile wallet account response rejected: {err}");
            CosmostationError::get_account(err)
        })?;
        debug!("Normalized {} mobile wallet account(s)", accounts.len());

        Ok(accounts)
    }

    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
    ) -> Result<AminoSignResponse, CosmostationError> {
        let sign_doc = serde_json::to_value(&sign_doc)
            .map_err(|err| CosmostationError::sign(RelayError::from(err)))?;

        let responses: Vec<AminoSignResponse> = self
            .request(
                SIGN_TX_METHOD,
                vec![json!(self.chain_id), json!(signer_address), sign_doc],
            )
            .await
            .map_err(|err| err.classify(CosmostationError::Sign))?;

        let response = AminoPayload::Relay(responses).normalize().map_err(|err| {
            warn!("Mobile wallet amino response rejected: {err}");
            CosmostationError::sign(err)
        })?;
        debug!("Normalized mobile wallet amino signature for chain {}", self.chain_id);

        Ok(response)
    }

    /// Direct signing is not available over the relay. This always fails with a signing
    /// error and sends nothing to the wallet.
    async fn sign_direct(
        &self,
        _signer_address: &str,
        _sign_doc: SignDoc,
    ) -> Result<DirectSignResponse, CosmostationError> {
        warn!("Direct signing requested over the mobile relay");

        Err(CosmostationError::sign(RelayError::DirectSignUnsupported))
    }
}
