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

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let os = kongming::Cloud::from_env()
        .await
        .expect("Failed to create an identity provider from the environment");

    let mappings = os
        .list_cpu_mappings()
        .await
        .expect("Cannot list CPU mappings");
    println!("CPU mappings:");
    for mapping in &mappings {
        println!(
            "Instance = {}, CPUs = {}, Host = {}",
            mapping.instance_uuid(),
            mapping.cpu_mappings(),
            mapping.host().clone().unwrap_or_default()
        );
    }
}
