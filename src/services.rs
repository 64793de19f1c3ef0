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

//! Catalog service types used by this client.

use osauth::services::{GenericService, VersionSelector};

/// Service type of the Kongming CPU pinning API.
pub const RESOURCE_PIN: GenericService = GenericService::new("resource_pin", VersionSelector::Any);

/// Service type of the baremetal compute API.
pub const BAREMETAL_COMPUTE: GenericService =
    GenericService::new("baremetal_compute", VersionSelector::Any);
