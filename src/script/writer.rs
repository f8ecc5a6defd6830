use super::ScriptResponse;
use crate::ScriptgenError;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Permission bits for generated scripts: rwxr-xr-x
#[cfg(unix)]
const SCRIPT_MODE: u32 = 0o755;

/// Write the script into `dir` and make it executable, returning the path written
pub fn write_script(
    dir: &Path,
    response: &ScriptResponse,
    fallback_filename: &str,
) -> Result<PathBuf, ScriptgenError> {
    let path = output_path(dir, response.output_filename(fallback_filename));

    tracing::info!("Writing script to: {:?}", path);

    let (mut file, created) = match open_script(&path) {
        Ok(opened) => opened,
        Err(source) => return Err(ScriptgenError::Write { path, source }),
    };

    if let Err(source) = fill_script(&mut file, response.content.as_bytes()) {
        drop(file);
        // Only a file this call created is removed; an existing one is left in place
        if created {
            std::fs::remove_file(&path).ok();
        }
        return Err(ScriptgenError::Write { path, source });
    }

    Ok(path)
}

/// Join `filename` onto `dir`, leaving it unprefixed when `dir` is the working directory
pub fn output_path(dir: &Path, filename: &str) -> PathBuf {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        PathBuf::from(filename)
    } else {
        dir.join(filename)
    }
}

/// Open `path` for writing, reporting whether the file was created by this call
fn open_script(path: &Path) -> std::io::Result<(File, bool)> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SCRIPT_MODE);
    }

    match options.open(path) {
        Ok(file) => Ok((file, true)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let file = OpenOptions::new().write(true).truncate(true).open(path)?;
            Ok((file, false))
        }
        Err(e) => Err(e),
    }
}

fn fill_script(file: &mut File, contents: &[u8]) -> std::io::Result<()> {
    file.write_all(contents)?;
    file.flush()?;

    // The mode passed to open is masked by the umask; set it explicitly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(SCRIPT_MODE))?;
    }

    Ok(())
}
