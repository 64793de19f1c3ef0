// Copyright 2024 The Kongming Authors.
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

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Status of a CPU mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MappingStatus {
    /// The mapping is applied to the instance.
    Active,
    /// The mapping is recorded and will be applied once the instance
    /// becomes active.
    Pending,
    /// Applying the mapping has failed.
    Error,
    /// Status not known to this version of the client.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CpuMapping {
    pub instance_uuid: String,
    pub cpu_mappings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MappingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CpuMappingsRoot {
    #[serde(default)]
    pub mappings: Vec<CpuMapping>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CpuMappingCreate {
    pub instance_uuid: String,
    pub cpu_mappings: String,
    pub wait_until_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CpuMappingCreate {
    pub fn new(instance_uuid: String, cpu_mappings: String) -> CpuMappingCreate {
        CpuMappingCreate {
            instance_uuid,
            cpu_mappings,
            wait_until_active: false,
            project_id: None,
            user_id: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Host {
    pub host_name: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub cpu_topology: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostsRoot {
    // The service nests the host listing under "instances".
    #[serde(default, rename = "instances")]
    pub hosts: Vec<Host>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Instance {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
