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

use crate::types::v1::node_type::ServiceRole;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// One running instance of a cluster.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct ClusterInstanceInfo {
    /// Only populated for Elasticsearch, with possible values: master, data, ingest, ml
    #[serde(default)]
    pub service_roles: Vec<String>,
}

impl ClusterInstanceInfo {
    /// Known roles in the order the server listed them. Unknown strings are
    /// skipped so newer servers keep working.
    pub fn roles(&self) -> Vec<ServiceRole> {
        self.service_roles
            .iter()
            .filter_map(|role| match ServiceRole::from_str(role) {
                Ok(role) => Some(role),
                Err(_) => {
                    debug!("ignoring unknown service role '{}'", role);
                    None
                }
            })
            .collect()
    }

    pub fn has_role(&self, role: ServiceRole) -> bool {
        self.service_roles.iter().any(|r| r == role.as_ref())
    }
}

/// Health and instances of a cluster.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ClusterTopologyInfo
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct ClusterTopologyInfo {
    /// Reported by the server, true when every instance is healthy.
    pub healthy: bool,
    pub instances: Vec<ClusterInstanceInfo>,
}

impl ClusterTopologyInfo {
    pub fn instances_with_role(&self, role: ServiceRole) -> usize {
        self.instances.iter().filter(|i| i.has_role(role)).count()
    }
}
