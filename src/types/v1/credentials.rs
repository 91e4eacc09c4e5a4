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

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generated login of a new Elasticsearch cluster.
///
/// Only returned by the create call. The password is shown once and should not
/// be stored, so `Debug` never prints it.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, JsonSchema, Default)]
pub struct ClusterCredentials {
    pub password: String,
    pub username: String,
}

impl ClusterCredentials {
    /// Update-plan responses carry no credentials.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for ClusterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response to an Elasticsearch cluster create or update-plan request.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct ClusterCrudResponse {
    pub elasticsearch_cluster_id: String,

    #[serde(default)]
    pub credentials: ClusterCredentials,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::codec;
    use serde_json::json;

    #[test]
    fn test_create_response_carries_credentials() {
        let body = json!({
            "elasticsearch_cluster_id": "1a2b3c",
            "credentials": {"username": "elastic", "password": "s3cret"}
        });

        let resp: ClusterCrudResponse = codec::decode_value(body).unwrap();
        assert_eq!(resp.elasticsearch_cluster_id, "1a2b3c");
        assert_eq!(resp.credentials.username, "elastic");
        assert_eq!(resp.credentials.password, "s3cret");
        assert!(!resp.credentials.is_empty());
    }

    #[test]
    fn test_update_response_without_credentials() {
        let resp: ClusterCrudResponse =
            codec::decode(br#"{"elasticsearch_cluster_id":"1a2b3c"}"#).unwrap();
        assert!(resp.credentials.is_empty());
        assert_eq!(resp.credentials, ClusterCredentials::default());
    }

    #[test]
    fn test_missing_cluster_id_fails() {
        let err = codec::decode::<ClusterCrudResponse>(
            br#"{"credentials":{"username":"","password":""}}"#,
        )
        .expect_err("cluster id is required");
        assert!(err.is_decode());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = ClusterCredentials {
            username: "elastic".to_string(),
            password: "s3cret".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(printed.contains("elastic"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_encode_uses_wire_keys() {
        let resp = ClusterCrudResponse {
            elasticsearch_cluster_id: "abc".to_string(),
            credentials: ClusterCredentials {
                username: "u".to_string(),
                password: "p".to_string(),
            },
        };
        let value: serde_json::Value =
            serde_json::from_slice(&codec::encode(&resp).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "elasticsearch_cluster_id": "abc",
                "credentials": {"password": "p", "username": "u"}
            })
        );
    }
}
