// Copyright 2025 RustFS Team
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

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to decode payload: {}", source))]
    Decode { source: serde_json::Error },

    #[snafu(display("failed to encode payload: {}", source))]
    Encode { source: serde_json::Error },

    #[snafu(display("serde_yaml error: {}", source))]
    Yaml { source: serde_yaml_ng::Error },

    #[snafu(display("invalid field '{}': {}", field, message))]
    InvalidField { field: String, message: String },
}

impl Error {
    /// True when the error came from a payload that could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
