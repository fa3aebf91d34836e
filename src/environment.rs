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

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Android") {
            Platform::Android
        } else if ["iPhone", "iPad", "iPod"]
            .iter()
            .any(|device| user_agent.contains(device))
        {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}

/// Signing backend picked by the resolver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backend {
    /// Locally injected extension provider.
    Extension,
    /// Mobile wallet reached through the relay bridge.
    Relay,
}

/// Snapshot of the runtime flags the backend choice depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeEnvironment {
    pub platform: Platform,
}

impl RuntimeEnvironment {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        Self::new(Platform::from_user_agent(user_agent))
    }

    pub fn desktop() -> Self {
        Self::new(Platform::Desktop)
    }

    pub fn is_mobile(&self) -> bool {
        self.platform.is_mobile()
    }

    pub fn backend(&self) -> Backend {
        if self.is_mobile() {
            Backend::Relay
        } else {
            Backend::Extension
        }
    }
}
