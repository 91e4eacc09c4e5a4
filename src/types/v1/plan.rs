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

use crate::types::error::{InvalidFieldSnafu, Result};
use crate::types::v1::node_type::{ElasticsearchNodeType, default_elasticsearch_node_type};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::ensure;
use tracing::warn;

/// Elasticsearch settings of a plan. The version must be a release the
/// platform supports, which only the server checks.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct ElasticsearchConfiguration {
    pub version: String,
}

/// Number, capacity and type of nodes in one tier, and how many zones they
/// are spread over.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ElasticsearchClusterTopologyElement
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct ElasticsearchClusterTopologyElement {
    /// Memory of each node, in MB.
    pub memory_per_node: i32,
    pub node_count_per_zone: i32,
    pub node_type: ElasticsearchNodeType,
    pub zone_count: i32,
}

impl ElasticsearchClusterTopologyElement {
    /// A tier of general purpose nodes.
    pub fn new(memory_per_node: i32, node_count_per_zone: i32, zone_count: i32) -> Self {
        Self {
            memory_per_node,
            node_count_per_zone,
            node_type: default_elasticsearch_node_type(),
            zone_count,
        }
    }

    pub fn with_node_type(mut self, node_type: ElasticsearchNodeType) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn total_nodes(&self) -> i64 {
        i64::from(self.node_count_per_zone) * i64::from(self.zone_count)
    }

    fn validate(&self, path: &str) -> Result<()> {
        ensure!(
            self.node_count_per_zone >= 0,
            InvalidFieldSnafu {
                field: format!("{}.node_count_per_zone", path),
                message: format!("must not be negative, got {}", self.node_count_per_zone),
            }
        );
        ensure!(
            self.zone_count >= 0,
            InvalidFieldSnafu {
                field: format!("{}.zone_count", path),
                message: format!("must not be negative, got {}", self.zone_count),
            }
        );
        ensure!(
            self.node_count_per_zone == 0 || self.memory_per_node > 0,
            InvalidFieldSnafu {
                field: format!("{}.memory_per_node", path),
                message: format!(
                    "must be greater than 0 for a tier with {} node(s) per zone",
                    self.node_count_per_zone
                ),
            }
        );

        if !self.node_type.is_usable() {
            warn!("{}.node_type has no role enabled", path);
        }

        Ok(())
    }
}

/// Desired version and topology of an Elasticsearch cluster.
///
/// Keys missing from a response decode to their zero value, an empty
/// topology included. Use `validate` before sending a plan.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ElasticsearchClusterPlan
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
#[serde(default)]
pub struct ElasticsearchClusterPlan {
    pub elasticsearch: ElasticsearchConfiguration,
    pub cluster_topology: Vec<ElasticsearchClusterTopologyElement>,
    pub zone_count: i32,
}

impl ElasticsearchClusterPlan {
    pub fn new(
        version: impl Into<String>,
        zone_count: i32,
        cluster_topology: Vec<ElasticsearchClusterTopologyElement>,
    ) -> Self {
        Self {
            elasticsearch: ElasticsearchConfiguration {
                version: version.into(),
            },
            cluster_topology,
            zone_count,
        }
    }

    /// Nodes across every tier and zone.
    pub fn total_nodes(&self) -> i64 {
        self.cluster_topology.iter().map(|e| e.total_nodes()).sum()
    }

    /// Checks the plan before it is sent. Decoded plans are never validated,
    /// the server is the authority on what it returns.
    pub fn validate(&self) -> Result<()> {
        self.validate_at("plan")
    }

    pub(crate) fn validate_at(&self, path: &str) -> Result<()> {
        ensure!(
            self.zone_count >= 1,
            InvalidFieldSnafu {
                field: format!("{}.zone_count", path),
                message: format!("must be at least 1, got {}", self.zone_count),
            }
        );
        ensure!(
            !self.cluster_topology.is_empty(),
            InvalidFieldSnafu {
                field: format!("{}.cluster_topology", path),
                message: "at least one topology element is required",
            }
        );

        for (i, element) in self.cluster_topology.iter().enumerate() {
            element.validate(&format!("{}.cluster_topology[{}]", path, i))?;
        }

        Ok(())
    }
}

/// A plan together with its health.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ElasticsearchClusterPlanInfo
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
#[serde(default)]
pub struct ElasticsearchClusterPlanInfo {
    pub healthy: bool,
    pub plan: ElasticsearchClusterPlan,
}

/// Current, pending and past plans of a cluster.
///
/// `pending` is omitted while no plan change is running and `history` may be
/// left out, both decode to their zero value. `history` is kept in the order
/// the server sent it.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ElasticsearchClusterPlansInfo
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
#[serde(default)]
pub struct ElasticsearchClusterPlansInfo {
    pub current: ElasticsearchClusterPlanInfo,
    pub healthy: bool,
    pub history: Vec<ElasticsearchClusterPlanInfo>,
    pub pending: ElasticsearchClusterPlanInfo,
}

impl ElasticsearchClusterPlansInfo {
    pub fn latest_history(&self) -> Option<&ElasticsearchClusterPlanInfo> {
        self.history.last()
    }
}
