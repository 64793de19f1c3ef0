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

//! CPU pinning API implementation bits.
//!
//! Covers the three resources of the `resource_pin` service: instance
//! CPU mappings (full CRUD), hosts (read-only) and instances
//! (read-only, fetch by UUID). Entry points live on
//! [Cloud](../struct.Cloud.html).

mod api;
mod hosts;
mod instances;
mod mappings;
mod protocol;

pub use self::hosts::Host;
pub use self::instances::Instance;
pub use self::mappings::{CpuMapping, CpuMappingUpdate, NewCpuMapping};
pub use self::protocol::MappingStatus;
