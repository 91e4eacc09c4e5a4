// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON entry points for request and response bodies.
//!
//! Decode failures come back as [`Error::Decode`](crate::types::error::Error::Decode)
//! with the underlying `serde_json` error untouched. Nothing is retried or
//! patched up here.

use crate::types::error::{DecodeSnafu, EncodeSnafu, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::any::type_name;
use tracing::debug;

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    debug!(target_type = type_name::<T>(), bytes = body.len(), "decoding payload");
    serde_json::from_slice(body).context(DecodeSnafu)
}

pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    debug!(target_type = type_name::<T>(), "decoding payload from value");
    serde_json::from_value(value).context(DecodeSnafu)
}

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let body = serde_json::to_vec(value).context(EncodeSnafu)?;
    debug!(source_type = type_name::<T>(), bytes = body.len(), "encoded payload");
    Ok(body)
}

pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String> {
    let body = serde_json::to_string_pretty(value).context(EncodeSnafu)?;
    debug!(source_type = type_name::<T>(), bytes = body.len(), "encoded payload");
    Ok(body)
}
