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

//! Baremetal flavor management.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use json_patch::PatchOperation;
use serde_json::{Map, Value};

use super::super::common::{FlavorRef, Refresh};
use super::super::session::Session;
use super::super::utils::{self, PatchEntry};
use super::super::Result;
use super::{api, protocol};

/// Structure representing a baremetal flavor.
#[derive(Clone, Debug)]
pub struct Flavor {
    session: Session,
    inner: protocol::Flavor,
}

/// A partial update of a flavor.
///
/// Changes are sent as one JSON patch operation per touched field, in
/// the order the fields were specified.
#[derive(Clone, Debug)]
pub struct FlavorUpdate {
    session: Session,
    id: String,
    changes: Vec<PatchEntry>,
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self.inner)
    }
}

impl Flavor {
    /// Load a Flavor object.
    pub(crate) async fn load<Id: AsRef<str>>(session: Session, id_or_name: Id) -> Result<Flavor> {
        let inner = api::get_flavor(&session, id_or_name).await?;
        Ok(Flavor { session, inner })
    }

    /// Load all flavors, in server response order.
    pub(crate) async fn list(session: Session) -> Result<Vec<Flavor>> {
        Ok(api::list_flavors(&session)
            .await?
            .into_iter()
            .map(|inner| Flavor {
                session: session.clone(),
                inner,
            })
            .collect())
    }

    transparent_property! {
        #[doc = "Unique ID of the flavor."]
        id: ref String
    }

    transparent_property! {
        #[doc = "Name of the flavor."]
        name: ref String
    }

    transparent_property! {
        #[doc = "Description of the flavor."]
        description: ref Option<String>
    }

    transparent_property! {
        #[doc = "Whether the flavor is public."]
        is_public: bool
    }

    transparent_property! {
        #[doc = "Whether the flavor is disabled for new instances."]
        disabled: bool
    }

    transparent_property! {
        #[doc = "Resources the flavor claims from placement."]
        resources: ref HashMap<String, u64>
    }

    transparent_property! {
        #[doc = "When the flavor was created."]
        created_at: Option<DateTime<FixedOffset>>
    }

    transparent_property! {
        #[doc = "When the flavor was last updated."]
        updated_at: Option<DateTime<FixedOffset>>
    }

    /// Represent the flavor as a plain field-to-value object.
    pub fn to_mapping(&self) -> Result<Map<String, Value>> {
        utils::to_object(&self.inner)
    }

    /// Start updating the flavor.
    pub fn update(&self) -> FlavorUpdate {
        FlavorUpdate::new(self.session.clone(), self.inner.id.clone())
    }

    /// Grant a project access to this flavor.
    pub async fn add_tenant_access<S: AsRef<str>>(&self, project: S) -> Result<()> {
        api::add_flavor_access(&self.session, &self.inner.id, project).await
    }

    /// Revoke a project's access to this flavor.
    pub async fn remove_tenant_access<S: AsRef<str>>(&self, project: S) -> Result<()> {
        api::remove_flavor_access(&self.session, &self.inner.id, project).await
    }
}

#[async_trait]
impl Refresh for Flavor {
    /// Refresh the flavor.
    async fn refresh(&mut self) -> Result<()> {
        self.inner = api::get_flavor_by_id(&self.session, &self.inner.id).await?;
        Ok(())
    }
}

impl PartialEq for Flavor {
    fn eq(&self, other: &Flavor) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Flavor {}

impl From<Flavor> for FlavorRef {
    fn from(value: Flavor) -> FlavorRef {
        FlavorRef::from(value.inner.id)
    }
}

impl<'f> From<&'f Flavor> for FlavorRef {
    fn from(value: &'f Flavor) -> FlavorRef {
        FlavorRef::from(value.inner.id.clone())
    }
}

impl FlavorUpdate {
    pub(crate) fn new(session: Session, id: String) -> FlavorUpdate {
        FlavorUpdate {
            session,
            id,
            changes: Vec::new(),
        }
    }

    /// Rename the flavor.
    pub fn with_name<S: Into<String>>(mut self, value: S) -> Self {
        self.changes
            .push(PatchEntry::Replace("name", value.into().into()));
        self
    }

    /// Replace the description of the flavor.
    pub fn with_description<S: Into<String>>(mut self, value: S) -> Self {
        self.changes
            .push(PatchEntry::Replace("description", value.into().into()));
        self
    }

    /// Make the flavor public or private.
    pub fn with_is_public(mut self, value: bool) -> Self {
        self.changes
            .push(PatchEntry::Replace("is_public", value.into()));
        self
    }

    /// Add an arbitrary patch operation.
    pub fn with_operation(mut self, operation: PatchOperation) -> Self {
        self.changes.push(PatchEntry::Raw(operation));
        self
    }

    /// Apply the update and return the modified flavor.
    pub async fn send(self) -> Result<Flavor> {
        let patch = utils::build_patch(self.changes)?;
        let inner = api::update_flavor(&self.session, &self.id, patch).await?;
        Ok(Flavor {
            session: self.session,
            inner,
        })
    }
}
