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

use serde::{Deserialize, Serialize};

pub const DEFAULT_BRIDGE: &str = "https://bridge.walletconnect.org";
pub const ACCOUNTS_METHOD: &str = "cosmostation_wc_accounts_v1";
pub const SIGN_TX_METHOD: &str = "cosmostation_wc_sign_tx_v1";

/// Options handed to the [`RelayConnector`](crate::relay_client::RelayConnector) when a
/// session is created.
///
/// Every field falls back to its default when missing, so a partial JSON document such as
/// `{"bridge": "https://my-bridge.example"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub bridge: String,
    pub signing_methods: Vec<String>,
}

impl RelayConfig {
    pub fn with_bridge<S: ToString>(mut self, bridge: S) -> Self {
        self.bridge = bridge.to_string();
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            bridge: DEFAULT_BRIDGE.to_string(),
            signing_methods: vec![ACCOUNTS_METHOD.to_string(), SIGN_TX_METHOD.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_default_methods() {
        let config: RelayConfig =
            serde_json::from_str(r#"{"bridge": "https://relay.example"}"#).unwrap();

        assert_eq!(config.bridge, "https://relay.example");
        assert_eq!(
            config.signing_methods,
            vec![ACCOUNTS_METHOD.to_string(), SIGN_TX_METHOD.to_string()]
        );
    }
}
