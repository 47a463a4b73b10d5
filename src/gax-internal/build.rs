// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;
use std::path::PathBuf;

// Records the compiler version, it is reported in the `User-Agent` header.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or("OUT_DIR not specified")?);
    let rustc = rustc_version::version()?;

    let mut f = std::fs::File::create(out_dir.join("build_env.rs"))?;
    writeln!(f, "pub(crate) const RUSTC_VERSION: &str = \"{rustc}\";")?;
    f.flush()?;
    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
