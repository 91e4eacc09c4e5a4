//  Copyright 2025 RustFS Team
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http:www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

use crate::types::v1::{
    ClusterInstanceInfo, ClusterTopologyInfo, CreateElasticsearchClusterRequest,
    ElasticsearchClusterInfo, ElasticsearchClusterPlan, ElasticsearchClusterPlanInfo,
    ElasticsearchClusterPlansInfo, ElasticsearchClusterTopologyElement, ElasticsearchNodeType,
    ServiceRole,
};

/// A cluster document as returned by `GET /api/v1/clusters/elasticsearch/{id}`.
pub const EXAMPLE_CLUSTER_INFO: &str = r#"{"cluster_id":"abc123","cluster_name":"prod","healthy":true,"status":"started","plan_info":{"healthy":true,"current":{"healthy":true,"plan":{"zone_count":3,"elasticsearch":{"version":"7.10.0"},"cluster_topology":[]}},"pending":{"healthy":false,"plan":{"zone_count":0,"elasticsearch":{"version":""},"cluster_topology":[]}},"history":[]},"topology":{"healthy":true,"instances":[]}}"#;

// Two zones: a general purpose tier and a machine learning tier, one node per zone each.
pub fn create_test_plan() -> ElasticsearchClusterPlan {
    ElasticsearchClusterPlan::new(
        "7.10.0",
        2,
        vec![
            ElasticsearchClusterTopologyElement::new(4096, 1, 2),
            ElasticsearchClusterTopologyElement::new(2048, 1, 2)
                .with_node_type(ElasticsearchNodeType::from_roles(&[ServiceRole::Ml])),
        ],
    )
}

pub fn create_test_request() -> CreateElasticsearchClusterRequest {
    CreateElasticsearchClusterRequest::new("test-cluster", create_test_plan())
}

pub fn create_test_cluster_info() -> ElasticsearchClusterInfo {
    let current = ElasticsearchClusterPlanInfo {
        healthy: true,
        plan: create_test_plan(),
    };

    ElasticsearchClusterInfo {
        cluster_id: "4a8b9c0d1e2f".to_string(),
        cluster_name: "test-cluster".to_string(),
        healthy: true,
        plan_info: ElasticsearchClusterPlansInfo {
            current: current.clone(),
            healthy: true,
            history: vec![current],
            pending: ElasticsearchClusterPlanInfo::default(),
        },
        status: "started".to_string(),
        topology: ClusterTopologyInfo {
            healthy: true,
            instances: vec![
                ClusterInstanceInfo {
                    service_roles: vec![
                        "master".to_string(),
                        "data".to_string(),
                        "ingest".to_string(),
                    ],
                },
                ClusterInstanceInfo {
                    service_roles: vec!["ml".to_string()],
                },
            ],
        },
    }
}
