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

use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let name = env::args().nth(1).expect("Provide a host name");

    let os = kongming::Cloud::from_env()
        .await
        .expect("Failed to create an identity provider from the environment");

    let host = os.get_host(&name).await.expect("Cannot get a host");
    println!("{}", host);
}
