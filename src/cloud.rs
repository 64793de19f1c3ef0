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

//! Cloud API.

use osauth::AuthType;

use super::baremetal::{self, Flavor, FlavorUpdate};
use super::common::{CpuMappingRef, FlavorRef};
use super::pinning::{CpuMapping, CpuMappingUpdate, Host, Instance, NewCpuMapping};
use super::session::Session;
use super::{Error, ErrorKind, Result};

/// Kongming cloud API.
///
/// Provides high-level API for working with the Kongming CPU pinning
/// service and the related baremetal compute flavors.
#[derive(Debug, Clone)]
pub struct Cloud {
    session: Session,
}

impl Cloud {
    /// Create a new cloud object with a given authentication plugin.
    ///
    /// See the [osauth documentation](https://docs.rs/osauth) for the
    /// available authentication plugins.
    ///
    /// # See Also
    ///
    /// * [from_config](#method.from_config) to create a Cloud from clouds.yaml
    /// * [from_env](#method.from_env) to create a Cloud from environment variables
    pub fn new<Auth: AuthType + 'static>(auth_type: Auth) -> Cloud {
        Cloud {
            session: Session::new(osauth::Session::new(auth_type)),
        }
    }

    /// Create a new cloud object from a configuration file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn cloud_from_config() -> kongming::Result<()> {
    /// let os = kongming::Cloud::from_config("cloud-1").await?;
    /// # Ok(()) }
    /// ```
    pub async fn from_config<S: AsRef<str>>(cloud_name: S) -> Result<Cloud> {
        Ok(Cloud {
            session: Session::from_config(cloud_name).await?,
        })
    }

    /// Create a new cloud object from environment variables.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn cloud_from_env() -> kongming::Result<()> {
    /// let os = kongming::Cloud::from_env().await?;
    /// # Ok(()) }
    /// ```
    pub async fn from_env() -> Result<Cloud> {
        Ok(Cloud {
            session: Session::from_env().await?,
        })
    }

    /// Get a host by its name.
    pub async fn get_host<Id: AsRef<str>>(&self, id_or_name: Id) -> Result<Host> {
        Host::load(self.session.clone(), id_or_name).await
    }

    /// List all hosts known to the pinning service.
    ///
    /// The order follows the server response; sort downstream if a
    /// deterministic order is needed.
    pub async fn list_hosts(&self) -> Result<Vec<Host>> {
        Host::list(self.session.clone()).await
    }

    /// Get an instance by its UUID.
    pub async fn get_instance<Id: AsRef<str>>(&self, id: Id) -> Result<Instance> {
        Instance::load(self.session.clone(), id).await
    }

    /// Get a CPU mapping by instance UUID or host name.
    ///
    /// An exact UUID is resolved with a single request; other tokens
    /// fall back to scanning the full listing and fail when they match
    /// zero or several mappings.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example() -> kongming::Result<()> {
    /// let os = kongming::Cloud::from_env().await?;
    /// let mapping = os
    ///     .get_cpu_mapping("22c91117-08de-4894-9aa9-6ef382400985")
    ///     .await?;
    /// println!("{}", mapping.cpu_mappings());
    /// # Ok(()) }
    /// ```
    pub async fn get_cpu_mapping<Id: AsRef<str>>(&self, id_or_name: Id) -> Result<CpuMapping> {
        CpuMapping::load(self.session.clone(), id_or_name).await
    }

    /// List all CPU mappings.
    ///
    /// The order follows the server response; sort downstream if a
    /// deterministic order is needed.
    pub async fn list_cpu_mappings(&self) -> Result<Vec<CpuMapping>> {
        CpuMapping::list(self.session.clone()).await
    }

    /// Prepare a new CPU mapping for creation.
    ///
    /// This call returns a builder; use [create](pinning/struct.NewCpuMapping.html#method.create)
    /// to send the request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example() -> kongming::Result<()> {
    /// let os = kongming::Cloud::from_env().await?;
    /// let mapping = os
    ///     .new_cpu_mapping("22c91117-08de-4894-9aa9-6ef382400985", "0:1,1:3")
    ///     .with_wait_until_active(true)
    ///     .create()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn new_cpu_mapping<I, C>(&self, instance_uuid: I, cpu_mappings: C) -> NewCpuMapping
    where
        I: Into<String>,
        C: Into<String>,
    {
        NewCpuMapping::new(
            self.session.clone(),
            instance_uuid.into(),
            cpu_mappings.into(),
        )
    }

    /// Prepare an update of a CPU mapping.
    ///
    /// Accepts either a mapping object or an instance UUID.
    pub fn update_cpu_mapping<M: Into<CpuMappingRef>>(&self, mapping: M) -> CpuMappingUpdate {
        CpuMappingUpdate::new(self.session.clone(), mapping.into().into())
    }

    /// Delete a CPU mapping by instance UUID or host name.
    ///
    /// The token is resolved the same way as in
    /// [get_cpu_mapping](#method.get_cpu_mapping) before deletion.
    pub async fn delete_cpu_mapping<Id: AsRef<str>>(&self, id_or_name: Id) -> Result<()> {
        let mapping = self.get_cpu_mapping(id_or_name).await?;
        mapping.delete().await
    }

    /// Delete several CPU mappings, continuing on failures.
    ///
    /// Every token is attempted even when an earlier one fails; each
    /// failure is logged, and one aggregate error reporting the failure
    /// count is returned at the end.
    pub async fn delete_cpu_mappings<Id: AsRef<str>>(&self, ids_or_names: &[Id]) -> Result<()> {
        let total = ids_or_names.len();
        let mut failures = 0usize;
        for id in ids_or_names {
            if let Err(err) = self.delete_cpu_mapping(id).await {
                error!("Failed to delete CPU mapping '{}': {}", id.as_ref(), err);
                failures += 1;
            }
        }

        if failures > 0 {
            Err(Error::new(
                ErrorKind::OperationFailed,
                format!("{} of {} CPU mappings failed to delete", failures, total),
            ))
        } else {
            Ok(())
        }
    }

    /// Get a baremetal flavor by its UUID or name.
    pub async fn get_flavor<Id: AsRef<str>>(&self, id_or_name: Id) -> Result<Flavor> {
        Flavor::load(self.session.clone(), id_or_name).await
    }

    /// List all baremetal flavors.
    ///
    /// The order follows the server response; sort downstream if a
    /// deterministic order is needed.
    pub async fn list_flavors(&self) -> Result<Vec<Flavor>> {
        Flavor::list(self.session.clone()).await
    }

    /// Prepare an update of a flavor.
    ///
    /// Accepts either a flavor object or a flavor UUID.
    pub fn update_flavor<F: Into<FlavorRef>>(&self, flavor: F) -> FlavorUpdate {
        FlavorUpdate::new(self.session.clone(), flavor.into().into())
    }

    /// Grant a project access to a non-public flavor.
    pub async fn add_flavor_access<F, S>(&self, flavor: F, project: S) -> Result<()>
    where
        F: Into<FlavorRef>,
        S: AsRef<str>,
    {
        baremetal::api::add_flavor_access(&self.session, flavor.into(), project).await
    }

    /// Revoke a project's access to a non-public flavor.
    pub async fn remove_flavor_access<F, S>(&self, flavor: F, project: S) -> Result<()>
    where
        F: Into<FlavorRef>,
        S: AsRef<str>,
    {
        baremetal::api::remove_flavor_access(&self.session, flavor.into(), project).await
    }
}

impl From<osauth::Session> for Cloud {
    fn from(value: osauth::Session) -> Cloud {
        Cloud {
            session: Session::from(value),
        }
    }
}
