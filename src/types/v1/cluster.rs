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
use crate::types::v1::plan::{ElasticsearchClusterPlan, ElasticsearchClusterPlansInfo};
use crate::types::v1::topology::ClusterTopologyInfo;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Top level settings of a cluster.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ClusterMetadataSettings
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct ClusterMetadataSettings {
    #[serde(rename = "name")]
    pub cluster_name: String,
}

/// Body of `POST /api/v1/clusters/elasticsearch`.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#CreateElasticsearchClusterRequest
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct CreateElasticsearchClusterRequest {
    pub cluster_name: String,
    pub plan: ElasticsearchClusterPlan,
}

impl CreateElasticsearchClusterRequest {
    pub fn new(cluster_name: impl Into<String>, plan: ElasticsearchClusterPlan) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            plan,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.cluster_name.is_empty(),
            InvalidFieldSnafu {
                field: "cluster_name",
                message: "must not be empty",
            }
        );
        self.plan.validate_at("plan")
    }
}

/// Lifecycle states the API reports in `ElasticsearchClusterInfo::status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ClusterState {
    Initializing,
    Stopping,
    Stopped,
    Rebooting,
    Restarting,
    Reconfiguring,
    Started,
}

/// Everything the API knows about one Elasticsearch cluster.
///
/// Keys missing from the response decode to their zero value.
///
/// https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html#ElasticsearchClusterInfo
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
#[serde(default)]
pub struct ElasticsearchClusterInfo {
    pub cluster_id: String,
    pub cluster_name: String,
    pub healthy: bool,
    pub plan_info: ElasticsearchClusterPlansInfo,
    pub status: String,
    pub topology: ClusterTopologyInfo,
}

impl ElasticsearchClusterInfo {
    /// `None` when the server reports a status this client does not know.
    pub fn state(&self) -> Option<ClusterState> {
        ClusterState::from_str(&self.status).ok()
    }

    /// The cluster reports `started`.
    pub fn is_running(&self) -> bool {
        self.state() == Some(ClusterState::Started)
    }
}
