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

//! Session structure definition.

use std::ops::Deref;

use crate::Result;

/// A session with a Kongming deployment.
///
/// A thin wrapper around the authenticated `osauth` session. This layer
/// only invokes request methods on it; authentication, the service
/// catalog and token refresh all live below.
#[derive(Debug, Clone)]
pub struct Session {
    inner: osauth::Session,
}

impl Session {
    /// Create a session from an existing authenticated session.
    pub fn new(inner: osauth::Session) -> Session {
        Session { inner }
    }

    /// Create a session from a `clouds.yaml` configuration entry.
    pub async fn from_config<S: AsRef<str>>(cloud_name: S) -> Result<Session> {
        Ok(Session {
            inner: osauth::Session::from_config(cloud_name).await?,
        })
    }

    /// Create a session from environment variables.
    pub async fn from_env() -> Result<Session> {
        Ok(Session {
            inner: osauth::Session::from_env().await?,
        })
    }
}

impl From<osauth::Session> for Session {
    fn from(value: osauth::Session) -> Session {
        Session::new(value)
    }
}

impl Deref for Session {
    type Target = osauth::Session;

    fn deref(&self) -> &osauth::Session {
        &self.inner
    }
}
