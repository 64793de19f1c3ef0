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

//! Foundation bits exposing the CPU pinning API.

use json_patch::Patch;
use reqwest::Method;

use super::super::services::RESOURCE_PIN;
use super::super::session::Session;
use super::super::utils;
use super::super::{ErrorKind, Result};
use super::protocol::*;

/// Get a CPU mapping by instance UUID or host name.
pub async fn get_mapping<S: AsRef<str>>(session: &Session, id_or_name: S) -> Result<CpuMapping> {
    let s = id_or_name.as_ref();
    match get_mapping_by_id(session, s).await {
        Ok(value) => Ok(value),
        Err(err) if err.kind() == ErrorKind::ResourceNotFound => {
            get_mapping_by_name(session, s).await
        }
        Err(err) => Err(err),
    }
}

/// Get a CPU mapping by the UUID of its instance.
pub async fn get_mapping_by_id<S: AsRef<str>>(session: &Session, id: S) -> Result<CpuMapping> {
    trace!("Fetching CPU mapping {}", id.as_ref());
    let mapping: CpuMapping = session
        .get(RESOURCE_PIN, &["instance_cpu_mappings", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", mapping);
    Ok(mapping)
}

/// Find the one CPU mapping matching the token in the full listing.
pub async fn get_mapping_by_name<S: AsRef<str>>(session: &Session, name: S) -> Result<CpuMapping> {
    let token = name.as_ref();
    trace!("Looking up CPU mapping {} in the listing", token);
    let mappings = list_mappings(session).await?;
    let result = utils::unique_match(mappings, token, "CPU mapping", |mapping| {
        mapping.instance_uuid == token || mapping.host.as_deref() == Some(token)
    })?;
    trace!("Received {:?}", result);
    Ok(result)
}

/// List CPU mappings.
pub async fn list_mappings(session: &Session) -> Result<Vec<CpuMapping>> {
    trace!("Listing CPU mappings");
    let root: CpuMappingsRoot = session
        .get(RESOURCE_PIN, &["instance_cpu_mappings"])
        .fetch()
        .await?;
    trace!("Received CPU mappings: {:?}", root.mappings);
    Ok(root.mappings)
}

/// Create a CPU mapping.
pub async fn create_mapping(session: &Session, request: CpuMappingCreate) -> Result<CpuMapping> {
    debug!("Creating a CPU mapping with {:?}", request);
    let mapping: CpuMapping = session
        .post(RESOURCE_PIN, &["instance_cpu_mappings"])
        .json(&request)
        .fetch()
        .await?;
    debug!("Created CPU mapping {:?}", mapping);
    Ok(mapping)
}

/// Delete a CPU mapping.
pub async fn delete_mapping<S: AsRef<str>>(session: &Session, id: S) -> Result<()> {
    trace!("Deleting CPU mapping {}", id.as_ref());
    let _ = session
        .delete(RESOURCE_PIN, &["instance_cpu_mappings", id.as_ref()])
        .send()
        .await?;
    debug!("Successfully deleted CPU mapping {}", id.as_ref());
    Ok(())
}

/// Update a CPU mapping with a JSON patch.
pub async fn update_mapping<S: AsRef<str>>(
    session: &Session,
    id: S,
    patch: Patch,
) -> Result<CpuMapping> {
    debug!("Updating CPU mapping {} with {:?}", id.as_ref(), patch);
    let mapping: CpuMapping = session
        .request(RESOURCE_PIN, Method::PATCH, &["instance_cpu_mappings", id.as_ref()])
        .json(&patch)
        .fetch()
        .await?;
    debug!("Updated CPU mapping {:?}", mapping);
    Ok(mapping)
}

/// Get a host by its name.
pub async fn get_host<S: AsRef<str>>(session: &Session, id_or_name: S) -> Result<Host> {
    let s = id_or_name.as_ref();
    match get_host_by_id(session, s).await {
        Ok(value) => Ok(value),
        Err(err) if err.kind() == ErrorKind::ResourceNotFound => get_host_by_name(session, s).await,
        Err(err) => Err(err),
    }
}

/// Get a host by its name via a direct fetch.
pub async fn get_host_by_id<S: AsRef<str>>(session: &Session, id: S) -> Result<Host> {
    trace!("Fetching host {}", id.as_ref());
    let host: Host = session
        .get(RESOURCE_PIN, &["hosts", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", host);
    Ok(host)
}

/// Find the one host matching the token in the full listing.
pub async fn get_host_by_name<S: AsRef<str>>(session: &Session, name: S) -> Result<Host> {
    let token = name.as_ref();
    trace!("Looking up host {} in the listing", token);
    let hosts = list_hosts(session).await?;
    let result = utils::unique_match(hosts, token, "host", |host| host.host_name == token)?;
    trace!("Received {:?}", result);
    Ok(result)
}

/// List hosts.
pub async fn list_hosts(session: &Session) -> Result<Vec<Host>> {
    trace!("Listing hosts");
    let root: HostsRoot = session.get(RESOURCE_PIN, &["hosts"]).fetch().await?;
    trace!("Received hosts: {:?}", root.hosts);
    Ok(root.hosts)
}

/// Get an instance by its UUID.
///
/// The service does not support listing instances, so there is no
/// fallback lookup by name.
pub async fn get_instance<S: AsRef<str>>(session: &Session, id: S) -> Result<Instance> {
    trace!("Fetching instance {}", id.as_ref());
    let instance: Instance = session
        .get(RESOURCE_PIN, &["instances", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", instance);
    Ok(instance)
}
