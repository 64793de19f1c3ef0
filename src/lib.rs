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

//! Kongming client in Rust.
//!
//! Kongming is a compute-extension service managing dedicated CPU
//! assignments ("CPU mappings") for instances, together with the hosts
//! they land on and the baremetal flavors of the related
//! `baremetal_compute` service. The goal of this crate is to provide
//! a simple API for working with a Kongming deployment.
//!
//! Start with a [Cloud](struct.Cloud.html) object. It can be created
//! from a `clouds.yaml` entry, from standard `OS_*` environment
//! variables or from an existing [osauth](https://docs.rs/osauth)
//! session. All calls are asynchronous.
//!
//! # Example
//!
//! ```rust,no_run
//! async fn show_mappings() -> kongming::Result<()> {
//!     let os = kongming::Cloud::from_env().await?;
//!     for mapping in os.list_cpu_mappings().await? {
//!         println!("{} -> {:?}", mapping.instance_uuid(), mapping.host());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! The TLS backend is chosen via the `native-tls` (default) or `rustls`
//! features, forwarded to the underlying HTTP stack.

#![crate_name = "kongming"]
#![crate_type = "lib"]
#![doc(html_root_url = "https://docs.rs/kongming/0.1.0")]
// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
#![deny(
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    while_true
)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod utils;

pub mod baremetal;
mod cloud;
mod common;
mod error;
pub mod pinning;
pub mod services;
mod session;

pub use json_patch;
pub use osauth;

pub use crate::cloud::Cloud;
pub use crate::common::{CpuMappingRef, FlavorRef, HostRef, Refresh};
pub use crate::error::{Error, ErrorKind, Result};
