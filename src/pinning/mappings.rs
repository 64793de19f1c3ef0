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

//! Instance CPU mapping management.

use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use json_patch::PatchOperation;
use serde_json::{Map, Value};

use super::super::common::{CpuMappingRef, Refresh};
use super::super::session::Session;
use super::super::utils::{self, PatchEntry};
use super::super::Result;
use super::{api, protocol};

/// Structure representing a single instance CPU mapping.
#[derive(Clone, Debug)]
pub struct CpuMapping {
    session: Session,
    inner: protocol::CpuMapping,
}

/// A request to create a CPU mapping.
#[derive(Clone, Debug)]
pub struct NewCpuMapping {
    session: Session,
    inner: protocol::CpuMappingCreate,
}

/// A partial update of a CPU mapping.
///
/// Changes are sent as one JSON patch operation per touched field, in
/// the order the fields were specified.
#[derive(Clone, Debug)]
pub struct CpuMappingUpdate {
    session: Session,
    id: String,
    changes: Vec<PatchEntry>,
}

impl Display for CpuMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self.inner)
    }
}

impl CpuMapping {
    /// Load a CpuMapping object.
    pub(crate) async fn load<Id: AsRef<str>>(session: Session, id_or_name: Id) -> Result<CpuMapping> {
        let inner = api::get_mapping(&session, id_or_name).await?;
        Ok(CpuMapping { session, inner })
    }

    /// Load all CPU mappings, in server response order.
    pub(crate) async fn list(session: Session) -> Result<Vec<CpuMapping>> {
        Ok(api::list_mappings(&session)
            .await?
            .into_iter()
            .map(|inner| CpuMapping {
                session: session.clone(),
                inner,
            })
            .collect())
    }

    transparent_property! {
        #[doc = "UUID of the instance the mapping belongs to."]
        instance_uuid: ref String
    }

    transparent_property! {
        #[doc = "The CPU assignments of the instance."]
        cpu_mappings: ref String
    }

    transparent_property! {
        #[doc = "Name of the host the instance runs on."]
        host: ref Option<String>
    }

    transparent_property! {
        #[doc = "Status of the mapping."]
        status: Option<protocol::MappingStatus>
    }

    transparent_property! {
        #[doc = "UUID of the project owning the mapping."]
        project_id: ref Option<String>
    }

    transparent_property! {
        #[doc = "UUID of the user owning the mapping."]
        user_id: ref Option<String>
    }

    transparent_property! {
        #[doc = "When the mapping was created."]
        created_at: Option<DateTime<FixedOffset>>
    }

    transparent_property! {
        #[doc = "When the mapping was last updated."]
        updated_at: Option<DateTime<FixedOffset>>
    }

    /// Represent the mapping as a plain field-to-value object.
    ///
    /// Only fields the service actually returned are present.
    pub fn to_mapping(&self) -> Result<Map<String, Value>> {
        utils::to_object(&self.inner)
    }

    /// Start updating the mapping.
    pub fn update(&self) -> CpuMappingUpdate {
        CpuMappingUpdate::new(self.session.clone(), self.inner.instance_uuid.clone())
    }

    /// Delete the mapping.
    pub async fn delete(self) -> Result<()> {
        api::delete_mapping(&self.session, &self.inner.instance_uuid).await
    }
}

#[async_trait]
impl Refresh for CpuMapping {
    /// Refresh the mapping.
    async fn refresh(&mut self) -> Result<()> {
        self.inner = api::get_mapping_by_id(&self.session, &self.inner.instance_uuid).await?;
        Ok(())
    }
}

impl PartialEq for CpuMapping {
    fn eq(&self, other: &CpuMapping) -> bool {
        self.inner.instance_uuid == other.inner.instance_uuid
    }
}

impl Eq for CpuMapping {}

impl From<CpuMapping> for CpuMappingRef {
    fn from(value: CpuMapping) -> CpuMappingRef {
        CpuMappingRef::from(value.inner.instance_uuid)
    }
}

impl<'m> From<&'m CpuMapping> for CpuMappingRef {
    fn from(value: &'m CpuMapping) -> CpuMappingRef {
        CpuMappingRef::from(value.inner.instance_uuid.clone())
    }
}

impl NewCpuMapping {
    /// Start creating a CPU mapping.
    pub(crate) fn new(session: Session, instance_uuid: String, cpu_mappings: String) -> NewCpuMapping {
        NewCpuMapping {
            session,
            inner: protocol::CpuMappingCreate::new(instance_uuid, cpu_mappings),
        }
    }

    /// Request creation of the mapping.
    pub async fn create(self) -> Result<CpuMapping> {
        let inner = api::create_mapping(&self.session, self.inner).await?;
        Ok(CpuMapping {
            session: self.session,
            inner,
        })
    }

    creation_inner_field! {
        #[doc = "Set the project owning the mapping."]
        set_project_id, with_project_id -> project_id: optional String
    }

    creation_inner_field! {
        #[doc = "Set the user owning the mapping."]
        set_user_id, with_user_id -> user_id: optional String
    }

    creation_inner_field! {
        #[doc = "Defer applying until the instance becomes active."]
        set_wait_until_active, with_wait_until_active -> wait_until_active: bool
    }
}

impl CpuMappingUpdate {
    pub(crate) fn new(session: Session, id: String) -> CpuMappingUpdate {
        CpuMappingUpdate {
            session,
            id,
            changes: Vec::new(),
        }
    }

    /// Replace the CPU assignments of the instance.
    pub fn with_cpu_mappings<S: Into<String>>(mut self, value: S) -> Self {
        self.changes
            .push(PatchEntry::Replace("cpu_mappings", value.into().into()));
        self
    }

    /// Change whether applying is deferred until the instance is active.
    pub fn with_wait_until_active(mut self, value: bool) -> Self {
        self.changes
            .push(PatchEntry::Replace("wait_until_active", value.into()));
        self
    }

    /// Add an arbitrary patch operation.
    pub fn with_operation(mut self, operation: PatchOperation) -> Self {
        self.changes.push(PatchEntry::Raw(operation));
        self
    }

    /// Apply the update and return the modified mapping.
    pub async fn send(self) -> Result<CpuMapping> {
        let patch = utils::build_patch(self.changes)?;
        let inner = api::update_mapping(&self.session, &self.id, patch).await?;
        Ok(CpuMapping {
            session: self.session,
            inner,
        })
    }
}
