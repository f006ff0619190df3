use anyhow::{Context, Result};
use std::{ffi::OsStr, fs, path::Path};

pub const EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

// Name match applies to files and directories alike, at any depth.
fn is_excluded(name: &OsStr) -> bool {
    EXCLUDED_DIRS.iter().any(|excluded| name == OsStr::new(excluded))
}

pub fn copy_dir(src: &Path, dest: &Path) -> Result<u64> {
    fs::create_dir_all(dest).with_context(|| format!("create {}", dest.display()))?;

    let entries = fs::read_dir(src).with_context(|| format!("read_dir {}", src.display()))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if is_excluded(&name) {
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest.join(&name);

        if entry.file_type()?.is_dir() {
            copied += copy_dir(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!("copy {} -> {}", src_path.display(), dest_path.display())
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}
