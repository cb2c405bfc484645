//! Print dispatch boundary: hands a finished PDF to the OS default print
//! service and reports failures without touching the exported file.

use std::path::Path;
use std::process::Command;

use crate::error::BillError;

#[cfg(target_os = "windows")]
fn print_command(path: &Path) -> Command {
    let mut cmd = Command::new("powershell");
    cmd.arg("-NoProfile")
        .arg("-Command")
        .arg("Start-Process")
        .arg("-Verb")
        .arg("Print")
        .arg("-FilePath")
        .arg(path);
    cmd
}

// `lp` submits to the CUPS default destination on macOS and Linux.
#[cfg(not(target_os = "windows"))]
fn print_command(path: &Path) -> Command {
    let mut cmd = Command::new("lp");
    cmd.arg(path);
    cmd
}

/// Requests the default printer to print `path`. A missing print handler or
/// a non-zero exit is reported to the caller as a recoverable error; the PDF
/// on disk is never rolled back.
pub fn dispatch(path: &Path) -> Result<(), BillError> {
    let mut cmd = print_command(path);
    let program = cmd.get_program().to_string_lossy().into_owned();
    log::info!("dispatching {} to `{}`", path.display(), program);
    let status = cmd.status().map_err(|source| BillError::PrintUnavailable {
        command: program.clone(),
        source,
    })?;
    if !status.success() {
        return Err(BillError::PrintFailed {
            command: program,
            status,
        });
    }
    Ok(())
}
