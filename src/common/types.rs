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

//! Types and traits shared between services.

use async_trait::async_trait;

use crate::Result;

/// Trait representing something that can be refreshed.
#[async_trait]
pub trait Refresh {
    /// Refresh the resource representation.
    async fn refresh(&mut self) -> Result<()>;
}

macro_rules! opaque_resource_type {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub(crate) value: String,
        }

        impl From<String> for $name {
            fn from(value: String) -> $name {
                $name { value }
            }
        }

        impl<'s> From<&'s str> for $name {
            fn from(value: &'s str) -> $name {
                $name {
                    value: String::from(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.value
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.value.fmt(f)
            }
        }
    };
}

opaque_resource_type!(
    #[doc = "An ID of a `CpuMapping` (the instance UUID it belongs to)."]
    CpuMappingRef
);

opaque_resource_type!(
    #[doc = "A name of a `Host`."]
    HostRef
);

opaque_resource_type!(
    #[doc = "An ID or name of a `Flavor`."]
    FlavorRef
);
