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

//! Host information.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use super::super::common::{HostRef, Refresh};
use super::super::session::Session;
use super::super::utils;
use super::super::Result;
use super::{api, protocol};

/// Structure representing a compute host known to the pinning service.
///
/// Hosts are read-only from this client's perspective.
#[derive(Clone, Debug)]
pub struct Host {
    session: Session,
    inner: protocol::Host,
}

impl Display for Host {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self.inner)
    }
}

impl Host {
    /// Load a Host object.
    pub(crate) async fn load<Id: AsRef<str>>(session: Session, id_or_name: Id) -> Result<Host> {
        let inner = api::get_host(&session, id_or_name).await?;
        Ok(Host { session, inner })
    }

    /// Load all hosts, in server response order.
    pub(crate) async fn list(session: Session) -> Result<Vec<Host>> {
        Ok(api::list_hosts(&session)
            .await?
            .into_iter()
            .map(|inner| Host {
                session: session.clone(),
                inner,
            })
            .collect())
    }

    transparent_property! {
        #[doc = "Name of the host."]
        host_name: ref String
    }

    transparent_property! {
        #[doc = "CPU topology reported for the host."]
        cpu_topology: ref HashMap<String, Value>
    }

    transparent_property! {
        #[doc = "When the host record was created."]
        created_at: Option<DateTime<FixedOffset>>
    }

    transparent_property! {
        #[doc = "When the host record was last updated."]
        updated_at: Option<DateTime<FixedOffset>>
    }

    /// Represent the host as a plain field-to-value object.
    pub fn to_mapping(&self) -> Result<Map<String, Value>> {
        utils::to_object(&self.inner)
    }
}

#[async_trait]
impl Refresh for Host {
    /// Refresh the host record.
    async fn refresh(&mut self) -> Result<()> {
        self.inner = api::get_host_by_id(&self.session, &self.inner.host_name).await?;
        Ok(())
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Host) -> bool {
        self.inner.host_name == other.inner.host_name
    }
}

impl Eq for Host {}

impl From<Host> for HostRef {
    fn from(value: Host) -> HostRef {
        HostRef::from(value.inner.host_name)
    }
}

impl<'h> From<&'h Host> for HostRef {
    fn from(value: &'h Host) -> HostRef {
        HostRef::from(value.inner.host_name.clone())
    }
}
