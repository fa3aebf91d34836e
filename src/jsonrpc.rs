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

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC request sent to the mobile wallet through the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub id: u64,
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
}

impl JsonRpcRequest {
    /// Creates a request with a fresh [`payload_id`].
    pub fn new<M: ToString>(method: M, params: Vec<Value>) -> Self {
        Self::with_id(payload_id(), method, params)
    }

    pub fn with_id<M: ToString>(id: u64, method: M, params: Vec<Value>) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
        }
    }
}

/// Request id made of the current unix time in milliseconds followed by three random digits.
pub fn payload_id() -> u64 {
    let now_ms = Utc::now().timestamp_millis() as u64;
    let extra: u64 = rand::thread_rng().gen_range(0..1000);

    now_ms * 1000 + extra
}
