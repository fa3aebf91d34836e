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

pub mod base_resolver;
pub mod config;
pub mod environment;
pub mod error;
pub mod extension_provider;
pub mod extension_signer;
pub mod jsonrpc;
pub mod normalize;
pub mod relay_client;
pub mod relay_signer;
pub mod signer;
pub mod types;
