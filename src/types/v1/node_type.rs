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
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Role a node performs in an Elasticsearch cluster.
///
/// The API reports roles as plain strings (`master`, `data`, `ingest`, `ml`),
/// this enum is only a typed view over them.
#[derive(
    Deserialize,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceRole {
    Master,
    Data,
    Ingest,
    Ml,
}

/// Combination of roles for a tier of Elasticsearch nodes.
///
/// By default a node is master eligible, holds data and runs ingest
/// pipelines. Machine learning has to be enabled explicitly.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ElasticsearchNodeType
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
pub struct ElasticsearchNodeType {
    pub data: bool,
    pub ingest: bool,
    pub master: bool,
    pub ml: bool,
}

/// The general purpose node type: data, ingest and master, without ml.
pub fn default_elasticsearch_node_type() -> ElasticsearchNodeType {
    ElasticsearchNodeType {
        data: true,
        ingest: true,
        master: true,
        ml: false,
    }
}

impl Default for ElasticsearchNodeType {
    fn default() -> Self {
        default_elasticsearch_node_type()
    }
}

impl ElasticsearchNodeType {
    /// A node type with exactly the given roles enabled.
    pub fn from_roles(roles: &[ServiceRole]) -> Self {
        let mut node_type = ElasticsearchNodeType {
            data: false,
            ingest: false,
            master: false,
            ml: false,
        };
        for role in roles {
            match role {
                ServiceRole::Master => node_type.master = true,
                ServiceRole::Data => node_type.data = true,
                ServiceRole::Ingest => node_type.ingest = true,
                ServiceRole::Ml => node_type.ml = true,
            }
        }
        node_type
    }

    pub fn has_role(&self, role: ServiceRole) -> bool {
        match role {
            ServiceRole::Master => self.master,
            ServiceRole::Data => self.data,
            ServiceRole::Ingest => self.ingest,
            ServiceRole::Ml => self.ml,
        }
    }

    /// Enabled roles, in `master, data, ingest, ml` order.
    pub fn roles(&self) -> Vec<ServiceRole> {
        use strum::IntoEnumIterator;

        ServiceRole::iter().filter(|r| self.has_role(*r)).collect()
    }

    /// A tier with no role at all cannot serve anything.
    pub fn is_usable(&self) -> bool {
        self.data || self.ingest || self.master || self.ml
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::codec;
    use std::str::FromStr;

    #[test]
    fn test_default_node_type() {
        let node_type = default_elasticsearch_node_type();
        assert!(node_type.data);
        assert!(node_type.ingest);
        assert!(node_type.master);
        assert!(!node_type.ml);
        assert_eq!(node_type, ElasticsearchNodeType::default());
    }

    #[test]
    fn test_default_node_type_is_independent() {
        let mut first = default_elasticsearch_node_type();
        first.ml = true;
        first.data = false;
        assert_eq!(first.roles(), vec![ServiceRole::Master, ServiceRole::Ingest, ServiceRole::Ml]);

        let second = default_elasticsearch_node_type();
        assert!(!second.ml, "mutating one default must not leak into the next");
        assert!(second.data);
    }

    #[test]
    fn test_roles_follow_flags() {
        assert_eq!(
            default_elasticsearch_node_type().roles(),
            vec![ServiceRole::Master, ServiceRole::Data, ServiceRole::Ingest]
        );

        let ml_only = ElasticsearchNodeType::from_roles(&[ServiceRole::Ml]);
        assert_eq!(ml_only.roles(), vec![ServiceRole::Ml]);
        assert!(ml_only.is_usable());

        let none = ElasticsearchNodeType::from_roles(&[]);
        assert!(none.roles().is_empty());
        assert!(!none.is_usable());
    }

    #[test]
    fn test_service_role_strings() {
        assert_eq!(ServiceRole::from_str("ml").unwrap(), ServiceRole::Ml);
        assert_eq!(ServiceRole::from_str("master").unwrap(), ServiceRole::Master);
        assert!(ServiceRole::from_str("coordinating").is_err());
        assert_eq!(ServiceRole::Ingest.to_string(), "ingest");
        assert_eq!(ServiceRole::Data.as_ref(), "data");
    }

    #[test]
    fn test_node_type_wire_format() {
        let value: serde_json::Value =
            serde_json::from_slice(&codec::encode(&default_elasticsearch_node_type()).unwrap())
                .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"data": true, "ingest": true, "master": true, "ml": false})
        );

        let err = codec::decode::<ElasticsearchNodeType>(
            br#"{"data": 1, "ingest": true, "master": true, "ml": false}"#,
        )
        .expect_err("integer is not a boolean");
        assert!(err.is_decode());
    }
}
