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

//! Instance information.

use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::super::common::Refresh;
use super::super::session::Session;
use super::super::utils;
use super::super::Result;
use super::{api, protocol};

/// Structure representing an instance as the pinning service sees it.
#[derive(Clone, Debug)]
pub struct Instance {
    session: Session,
    inner: protocol::Instance,
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self.inner)
    }
}

impl Instance {
    /// Load an Instance object.
    pub(crate) async fn load<Id: AsRef<str>>(session: Session, id: Id) -> Result<Instance> {
        let inner = api::get_instance(&session, id).await?;
        Ok(Instance { session, inner })
    }

    transparent_property! {
        #[doc = "UUID of the instance."]
        uuid: ref String
    }

    transparent_property! {
        #[doc = "Name of the instance."]
        name: ref Option<String>
    }

    transparent_property! {
        #[doc = "Name of the host the instance runs on."]
        host: ref Option<String>
    }

    transparent_property! {
        #[doc = "Status of the instance."]
        status: ref Option<String>
    }

    /// Represent the instance as a plain field-to-value object.
    pub fn to_mapping(&self) -> Result<Map<String, Value>> {
        utils::to_object(&self.inner)
    }
}

#[async_trait]
impl Refresh for Instance {
    /// Refresh the instance representation.
    async fn refresh(&mut self) -> Result<()> {
        self.inner = api::get_instance(&self.session, &self.inner.uuid).await?;
        Ok(())
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Instance) -> bool {
        self.inner.uuid == other.inner.uuid
    }
}

impl Eq for Instance {}
