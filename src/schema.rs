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

use crate::codec;
use crate::types::error::Result;
use crate::types::v1::*;
use schemars::{Schema, schema_for};
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, EnumIter};
use tracing::info;

/// Every payload type of the API, addressable by name from the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    ClusterCredentials,
    ClusterCrudResponse,
    ClusterInstanceInfo,
    ClusterMetadataSettings,
    ClusterTopologyInfo,
    CreateElasticsearchClusterRequest,
    ElasticsearchClusterInfo,
    ElasticsearchClusterPlan,
    ElasticsearchClusterPlanInfo,
    ElasticsearchClusterPlansInfo,
    ElasticsearchClusterTopologyElement,
    ElasticsearchConfiguration,
    ElasticsearchNodeType,
}

fn canonical<T: Serialize + DeserializeOwned>(body: &[u8]) -> Result<String> {
    let value: T = codec::decode(body)?;
    codec::encode_pretty(&value)
}

impl Kind {
    pub fn json_schema(self) -> Schema {
        match self {
            Kind::ClusterCredentials => schema_for!(ClusterCredentials),
            Kind::ClusterCrudResponse => schema_for!(ClusterCrudResponse),
            Kind::ClusterInstanceInfo => schema_for!(ClusterInstanceInfo),
            Kind::ClusterMetadataSettings => schema_for!(ClusterMetadataSettings),
            Kind::ClusterTopologyInfo => schema_for!(ClusterTopologyInfo),
            Kind::CreateElasticsearchClusterRequest => {
                schema_for!(CreateElasticsearchClusterRequest)
            }
            Kind::ElasticsearchClusterInfo => schema_for!(ElasticsearchClusterInfo),
            Kind::ElasticsearchClusterPlan => schema_for!(ElasticsearchClusterPlan),
            Kind::ElasticsearchClusterPlanInfo => schema_for!(ElasticsearchClusterPlanInfo),
            Kind::ElasticsearchClusterPlansInfo => schema_for!(ElasticsearchClusterPlansInfo),
            Kind::ElasticsearchClusterTopologyElement => {
                schema_for!(ElasticsearchClusterTopologyElement)
            }
            Kind::ElasticsearchConfiguration => schema_for!(ElasticsearchConfiguration),
            Kind::ElasticsearchNodeType => schema_for!(ElasticsearchNodeType),
        }
    }

    /// Decodes `body` as this kind and re-encodes it, dropping keys the type
    /// does not know.
    pub fn canonicalize(self, body: &[u8]) -> Result<String> {
        match self {
            Kind::ClusterCredentials => canonical::<ClusterCredentials>(body),
            Kind::ClusterCrudResponse => canonical::<ClusterCrudResponse>(body),
            Kind::ClusterInstanceInfo => canonical::<ClusterInstanceInfo>(body),
            Kind::ClusterMetadataSettings => canonical::<ClusterMetadataSettings>(body),
            Kind::ClusterTopologyInfo => canonical::<ClusterTopologyInfo>(body),
            Kind::CreateElasticsearchClusterRequest => {
                canonical::<CreateElasticsearchClusterRequest>(body)
            }
            Kind::ElasticsearchClusterInfo => canonical::<ElasticsearchClusterInfo>(body),
            Kind::ElasticsearchClusterPlan => canonical::<ElasticsearchClusterPlan>(body),
            Kind::ElasticsearchClusterPlanInfo => canonical::<ElasticsearchClusterPlanInfo>(body),
            Kind::ElasticsearchClusterPlansInfo => {
                canonical::<ElasticsearchClusterPlansInfo>(body)
            }
            Kind::ElasticsearchClusterTopologyElement => {
                canonical::<ElasticsearchClusterTopologyElement>(body)
            }
            Kind::ElasticsearchConfiguration => canonical::<ElasticsearchConfiguration>(body),
            Kind::ElasticsearchNodeType => canonical::<ElasticsearchNodeType>(body),
        }
    }

    /// Decodes `body` as this kind. Outbound create payloads are also checked
    /// with their client-side rules.
    pub fn validate(self, body: &[u8]) -> Result<()> {
        match self {
            Kind::CreateElasticsearchClusterRequest => {
                codec::decode::<CreateElasticsearchClusterRequest>(body)?.validate()?
            }
            Kind::ElasticsearchClusterPlan => {
                codec::decode::<ElasticsearchClusterPlan>(body)?.validate()?
            }
            other => {
                other.canonicalize(body)?;
            }
        }

        info!("payload is a valid {}", self);
        Ok(())
    }

    #[cfg(test)]
    fn schema_name(self) -> String {
        fn name<T: schemars::JsonSchema>() -> String {
            T::schema_name().into_owned()
        }

        match self {
            Kind::ClusterCredentials => name::<ClusterCredentials>(),
            Kind::ClusterCrudResponse => name::<ClusterCrudResponse>(),
            Kind::ClusterInstanceInfo => name::<ClusterInstanceInfo>(),
            Kind::ClusterMetadataSettings => name::<ClusterMetadataSettings>(),
            Kind::ClusterTopologyInfo => name::<ClusterTopologyInfo>(),
            Kind::CreateElasticsearchClusterRequest => name::<CreateElasticsearchClusterRequest>(),
            Kind::ElasticsearchClusterInfo => name::<ElasticsearchClusterInfo>(),
            Kind::ElasticsearchClusterPlan => name::<ElasticsearchClusterPlan>(),
            Kind::ElasticsearchClusterPlanInfo => name::<ElasticsearchClusterPlanInfo>(),
            Kind::ElasticsearchClusterPlansInfo => name::<ElasticsearchClusterPlansInfo>(),
            Kind::ElasticsearchClusterTopologyElement => {
                name::<ElasticsearchClusterTopologyElement>()
            }
            Kind::ElasticsearchConfiguration => name::<ElasticsearchConfiguration>(),
            Kind::ElasticsearchNodeType => name::<ElasticsearchNodeType>(),
        }
    }
}
