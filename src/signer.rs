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
use crate::types::{AccountData, AminoSignResponse, DirectSignResponse, SignDoc, StdSignDoc};
use async_trait::async_trait;

/// Abstraction over a signer that never holds the private key in the calling process.
///
/// Transaction builders only need the accounts the wallet exposes and the ability to get
/// amino or direct sign documents signed. Both
/// [`ExtensionSigner`](crate::extension_signer::ExtensionSigner) and
/// [`MobileSigner`](crate::relay_signer::MobileSigner) implement this trait, and
/// [`CosmostationSigner`](crate::base_resolver::CosmostationSigner) dispatches to whichever
/// one the resolver picked.
#[async_trait]
pub trait OfflineSigner: Send + Sync {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, CosmostationError>;

    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
    ) -> Result<AminoSignResponse, CosmostationError>;

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
    ) -> Result<DirectSignResponse, CosmostationError>;
}
