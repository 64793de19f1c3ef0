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

//! Baremetal compute API implementation bits.
//!
//! Only the flavor resource is covered: fetching, listing, partial
//! updates via JSON patch and tenant access management. Entry points
//! live on [Cloud](../struct.Cloud.html).

pub(crate) mod api;
mod flavors;
mod protocol;

pub use self::flavors::{Flavor, FlavorUpdate};
