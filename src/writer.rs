//! Grafana rule group output
//!
//! Renders the mapped groups as two-space indented JSON and delivers the
//! document to stdout or a file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::mapper::GrafanaRuleGroup;

/// Permission bits of a written output file
pub const OUTPUT_FILE_MODE: u32 = 0o644;

/// Where the rendered document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output, followed by a trailing newline
    Stdout,
    /// A file, replaced if it exists
    File(PathBuf),
}

impl Sink {
    /// Build a sink from an optional output path
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Sink::Stdout, Sink::File)
    }
}

impl std::fmt::Display for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Stdout => write!(f, "stdout"),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Render groups as indented JSON
///
/// An empty slice renders as `[]`.
///
/// # Errors
/// Returns `ConvertError::Serialize` if encoding fails.
pub fn render(groups: &[GrafanaRuleGroup]) -> ConvertResult<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

/// Deliver a rendered document to the sink
///
/// # Errors
/// Returns `ConvertError::Write` if the sink cannot be written.
pub fn write_output(document: &str, sink: &Sink) -> ConvertResult<()> {
    match sink {
        Sink::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{document}")
                .and_then(|()| handle.flush())
                .map_err(|source| ConvertError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
        Sink::File(path) => write_file(path, document).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        }),
    }
}

fn write_file(path: &Path, document: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(document.as_bytes())?;

    // `mode` only applies on creation; existing files are reset explicitly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(OUTPUT_FILE_MODE))?;
    }

    file.flush()?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "Wrote output file");
    Ok(())
}
