//! Stages the trunk output (`frontend/dist`) under `static/dist` so the server
//! can embed it with `include_dir!`. The target directory always exists, even
//! before the front end has been built, so the backend compiles on its own.

use fs_extra::dir::{copy, CopyOptions};
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let staging = Path::new("static");
    let bundle = Path::new("../frontend/dist");

    println!("cargo:rerun-if-changed=../frontend/dist");

    if bundle.exists() {
        if staging.exists() {
            fs::remove_dir_all(staging)?;
        }
        fs::create_dir_all(staging)?;
        copy(bundle, staging, &CopyOptions::new().overwrite(true))?;
    }

    fs::create_dir_all(staging.join("dist"))?;
    Ok(())
}
