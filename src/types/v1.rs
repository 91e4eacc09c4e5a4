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

//! Payloads of the ECE `/api/v1/clusters/elasticsearch` endpoints.
//!
//! https://www.elastic.co/guide/en/cloud-enterprise/current/definitions.html

pub mod cluster;
pub mod credentials;
pub mod node_type;
pub mod plan;
pub mod topology;

pub use cluster::{
    ClusterMetadataSettings, ClusterState, CreateElasticsearchClusterRequest,
    ElasticsearchClusterInfo,
};
pub use credentials::{ClusterCredentials, ClusterCrudResponse};
pub use node_type::{ElasticsearchNodeType, ServiceRole, default_elasticsearch_node_type};
pub use plan::{
    ElasticsearchClusterPlan, ElasticsearchClusterPlanInfo, ElasticsearchClusterPlansInfo,
    ElasticsearchClusterTopologyElement, ElasticsearchConfiguration,
};
pub use topology::{ClusterInstanceInfo, ClusterTopologyInfo};
