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

//! Foundation bits exposing the baremetal compute flavor API.

use json_patch::Patch;
use reqwest::Method;

use super::super::services::BAREMETAL_COMPUTE;
use super::super::session::Session;
use super::super::utils;
use super::super::{ErrorKind, Result};
use super::protocol::*;

/// Get a flavor by its UUID or name.
pub async fn get_flavor<S: AsRef<str>>(session: &Session, id_or_name: S) -> Result<Flavor> {
    let s = id_or_name.as_ref();
    match get_flavor_by_id(session, s).await {
        Ok(value) => Ok(value),
        Err(err) if err.kind() == ErrorKind::ResourceNotFound => {
            get_flavor_by_name(session, s).await
        }
        Err(err) => Err(err),
    }
}

/// Get a flavor by its UUID.
pub async fn get_flavor_by_id<S: AsRef<str>>(session: &Session, id: S) -> Result<Flavor> {
    trace!("Fetching flavor {}", id.as_ref());
    let flavor: Flavor = session
        .get(BAREMETAL_COMPUTE, &["flavors", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", flavor);
    Ok(flavor)
}

/// Find the one flavor matching the token in the full listing.
pub async fn get_flavor_by_name<S: AsRef<str>>(session: &Session, name: S) -> Result<Flavor> {
    let token = name.as_ref();
    trace!("Looking up flavor {} in the listing", token);
    let flavors = list_flavors(session).await?;
    let result = utils::unique_match(flavors, token, "flavor", |flavor| {
        flavor.id == token || flavor.name == token
    })?;
    trace!("Received {:?}", result);
    Ok(result)
}

/// List flavors.
pub async fn list_flavors(session: &Session) -> Result<Vec<Flavor>> {
    trace!("Listing flavors");
    let root: FlavorsRoot = session
        .get(BAREMETAL_COMPUTE, &["flavors"])
        .fetch()
        .await?;
    trace!("Received flavors: {:?}", root.flavors);
    Ok(root.flavors)
}

/// Update a flavor with a JSON patch.
pub async fn update_flavor<S: AsRef<str>>(
    session: &Session,
    id: S,
    patch: Patch,
) -> Result<Flavor> {
    debug!("Updating flavor {} with {:?}", id.as_ref(), patch);
    let flavor: Flavor = session
        .request(BAREMETAL_COMPUTE, Method::PATCH, &["flavors", id.as_ref()])
        .json(&patch)
        .fetch()
        .await?;
    debug!("Updated flavor {:?}", flavor);
    Ok(flavor)
}

/// Grant a project access to a non-public flavor.
pub async fn add_flavor_access<S1, S2>(session: &Session, id: S1, project: S2) -> Result<()>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    debug!(
        "Granting project {} access to flavor {}",
        project.as_ref(),
        id.as_ref()
    );
    let body = FlavorAccess {
        tenant_id: String::from(project.as_ref()),
    };
    let _ = session
        .post(BAREMETAL_COMPUTE, &["flavors", id.as_ref(), "tenants"])
        .json(&body)
        .send()
        .await?;
    debug!(
        "Granted project {} access to flavor {}",
        project.as_ref(),
        id.as_ref()
    );
    Ok(())
}

/// Revoke a project's access to a non-public flavor.
pub async fn remove_flavor_access<S1, S2>(session: &Session, id: S1, project: S2) -> Result<()>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    debug!(
        "Revoking access to flavor {} from project {}",
        id.as_ref(),
        project.as_ref()
    );
    let _ = session
        .delete(
            BAREMETAL_COMPUTE,
            &["flavors", id.as_ref(), "tenants", project.as_ref()],
        )
        .send()
        .await?;
    debug!(
        "Revoked access to flavor {} from project {}",
        id.as_ref(),
        project.as_ref()
    );
    Ok(())
}
