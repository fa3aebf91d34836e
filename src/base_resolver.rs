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
use crate::environment::{Backend, RuntimeEnvironment};
use crate::error::CosmostationError;
use crate::extension_provider::ExtensionAgent;
use crate::extension_signer::ExtensionSigner;
use crate::relay_client::RelayConnector;
use crate::relay_signer::MobileSigner;
use crate::signer::OfflineSigner;
use crate::types::{AccountData, AminoSignResponse, DirectSignResponse, SignDoc, StdSignDoc};
use async_trait::async_trait;
use log::{debug, warn};

/// Signer returned by [`BaseSignerResolver::get_offline_signer`].
pub enum CosmostationSigner<Agent, Connector>
where
    Agent: ExtensionAgent,
    Connector: RelayConnector,
{
    Extension(ExtensionSigner<Agent::Provider>),
    Mobile(MobileSigner<Connector::Session>),
}

impl<Agent, Connector> CosmostationSigner<Agent, Connector>
where
    Agent: ExtensionAgent,
    Connector: RelayConnector,
{
    pub fn backend(&self) -> Backend {
        match self {
            CosmostationSigner::Extension(_) => Backend::Extension,
            CosmostationSigner::Mobile(_) => Backend::Relay,
        }
    }

    fn as_offline_signer(&self) -> &dyn OfflineSigner {
        match self {
            CosmostationSigner::Extension(signer) => signer,
            CosmostationSigner::Mobile(signer) => signer,
        }
    }
}

#[async_trait]
impl<Agent, Connector> OfflineSigner for CosmostationSigner<Agent, Connector>
where
    Agent: ExtensionAgent,
    Connector: RelayConnector,
{
    async fn get_accounts(&self) -> Result<Vec<AccountData>, CosmostationError> {
        self.as_offline_signer().get_accounts().await
    }

    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
    ) -> Result<AminoSignResponse, CosmostationError> {
        self.as_offline_signer()
            .sign_amino(signer_address, sign_doc)
            .await
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
    ) -> Result<DirectSignResponse, CosmostationError> {
        self.as_offline_signer()
            .sign_direct(signer_address, sign_doc)
            .await
    }
}

/// Picks and builds the offline signer for the current runtime.
///
/// The resolver is generic over the two wallet backends so that the host application can
/// plug in whatever bindings it has for the injected extension and for the relay bridge.
/// It holds no session itself: every signer it returns owns its own provider handle or
/// relay session, and the caller decides when to drop or
/// [`disconnect`](MobileSigner::disconnect) it.
///
/// # Examples
///
/// ```rust,ignore
/// use cosmostation_signer_rs::base_resolver::BaseSignerResolver;
/// use cosmostation_signer_rs::environment::RuntimeEnvironment;
/// use cosmostation_signer_rs::signer::OfflineSigner;
///
/// let resolver = BaseSignerResolver::new(extension_agent, relay_connector);
/// let environment = RuntimeEnvironment::from_user_agent(&user_agent);
///
/// let signer = resolver.get_offline_signer("cosmoshub-4", &environment).await?;
/// let accounts = signer.get_accounts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct BaseSignerResolver<Agent, Connector>
where
    Agent: ExtensionAgent,
    Connector: RelayConnector,
{
    extension_agent: Agent,
    relay_connector: Connector,
    relay_config: RelayConfig,
}

impl<Agent, Connector> BaseSignerResolver<Agent, Connector>
where
    Agent: ExtensionAgent,
    Connector: RelayConnector,
{
    pub fn new(extension_agent: Agent, relay_connector: Connector) -> Self {
        Self::new_custom(extension_agent, relay_connector, RelayConfig::default())
    }

    pub fn new_custom(
        extension_agent: Agent,
        relay_connector: Connector,
        relay_config: RelayConfig,
    ) -> Self {
        BaseSignerResolver {
            extension_agent,
            relay_connector,
            relay_config,
        }
    }

    pub fn relay_config(&self) -> &RelayConfig {
        &self.relay_config
    }

    pub async fn get_offline_signer(
        &self,
        chain_id: &str,
        environment: &RuntimeEnvironment,
    ) -> Result<CosmostationSigner<Agent, Connector>, CosmostationError> {
        let backend = environment.backend();
        debug!("Resolved {backend:?} backend for chain {chain_id}");

        match backend {
            Backend::Relay => self
                .get_mobile_offline_signer_with_connect(chain_id)
                .await
                .map(CosmostationSigner::Mobile),
            Backend::Extension => self
                .get_extension_offline_signer(chain_id)
                .await
                .map(CosmostationSigner::Extension),
        }
    }

    pub async fn get_extension_offline_signer(
        &self,
        chain_id: &str,
    ) -> Result<ExtensionSigner<Agent::Provider>, CosmostationError> {
        let provider = self.extension_agent.provider().await.map_err(|err| {
            warn!("Cosmostation extension is not available: {err}");
            CosmostationError::extension_install(err)
        })?;

        Ok(ExtensionSigner::new(provider, chain_id))
    }

    pub async fn get_mobile_offline_signer_with_connect(
        &self,
        chain_id: &str,
    ) -> Result<MobileSigner<Connector::Session>, CosmostationError> {
        let session = self.connect_wallet().await?;

        Ok(MobileSigner::new(session, chain_id))
    }

    /// Replaces any stale session on the connector with a new one and waits for the wallet
    /// to approve it.
    pub async fn connect_wallet(&self) -> Result<Connector::Session, CosmostationError> {
        if let Err(err) = self.relay_connector.kill_stale_session().await {
            warn!("Ignoring failure to kill the previous relay session: {err}");
        }

        debug!("Creating relay session through {}", self.relay_config.bridge);

        self.relay_connector
            .create_session(&self.relay_config)
            .await
            .map_err(|err| {
                warn!("Relay session could not be established: {err}");
                CosmostationError::mobile_connect(err)
            })
    }
}
