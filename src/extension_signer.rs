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

use crate::error::CosmostationError;
use crate::extension_provider::ExtensionProvider;
use crate::normalize::{
    AccountPayload, AminoPayload, normalize_direct_response, to_extension_direct_doc,
};
use crate::signer::OfflineSigner;
use crate::types::{AccountData, AminoSignResponse, DirectSignResponse, SignDoc, StdSignDoc};
use async_trait::async_trait;
use log::{debug, warn};

/// Offline signer backed by the browser extension's provider handle.
///
/// The signer is bound to one chain id. The `signer_address` arguments of the
/// [`OfflineSigner`] methods are ignored: the extension always signs with the account it
/// exposes for that chain.
#[derive(Debug, Clone)]
pub struct ExtensionSigner<Provider>
where
    Provider: ExtensionProvider,
{
    provider: Provider,
    chain_id: String,
}

impl<Provider> ExtensionSigner<Provider>
where
    Provider: ExtensionProvider,
{
    pub fn new<S: ToString>(provider: Provider, chain_id: S) -> Self {
        ExtensionSigner {
            provider,
            chain_id: chain_id.to_string(),
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

}

#[async_trait]
impl<Provider> OfflineSigner for ExtensionSigner<Provider>
where
    Provider: ExtensionProvider,
{
    async fn get_accounts(&self) -> Result<Vec<AccountData>, CosmostationError> {
        debug!("Requesting extension account for chain {}", self.chain_id);

        let account = self
            .provider
            .get_account(&self.chain_id)
            .await
            .map_err(|err| {
                warn!("Extension account request failed: {err}");
                CosmostationError::get_account(err)
            })?;

        let accounts = AccountPayload::Extension(account).normalize().map_err(|err| {
            warn!("Extension account response rejected: {err}");
            CosmostationError::get_account(err)
        })?;
        debug!("Normalized {} extension account(s)", accounts.len());

        Ok(accounts)
    }

    async fn sign_amino(
        &self,
        _signer_address: &str,
        sign_doc: StdSignDoc,
    ) -> Result<AminoSignResponse, CosmostationError> {
        debug!("Requesting extension amino signature for chain {}", self.chain_id);

        let response = self
            .provider
            .sign_amino(&self.chain_id, &sign_doc)
            .await
            .map_err(|err| {
                warn!("Extension amino signing failed: {err}");
                CosmostationError::sign(err)
            })?;

        let response = AminoPayload::Extension(response).normalize().map_err(|err| {
            warn!("Extension amino response rejected: {err}");
            CosmostationError::sign(err)
        })?;
        debug!("Normalized extension amino signature for chain {}", self.chain_id);

        Ok(response)
    }

    async fn sign_direct(
        &self,
        _signer_address: &str,
        sign_doc: SignDoc,
    ) -> Result<DirectSignResponse, CosmostationError> {
        debug!("Requesting extension direct signature for chain {}", self.chain_id);

        let response = self
            .provider
            .sign_direct(&self.chain_id, &to_extension_direct_doc(&sign_doc))
            .await
            .map_err(|err| {
                warn!("Extension direct signing failed: {err}");
                CosmostationError::sign(err)
            })?;

        let response = normalize_direct_response(response).map_err(|err| {
            warn!("Extension direct response rejected: {err}");
            CosmostationError::sign(err)
        })?;
        debug!("Normalized extension direct signature for chain {}", self.chain_id);

        Ok(response)
    }
}
