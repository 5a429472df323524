//! Where the harness writes generated proofs and reads default test-vector files from.

use std::fmt::Display;
use std::path::PathBuf;

/// The on-disk location the harness uses for everything it writes, unless overridden.
#[derive(Debug, Clone)]
pub struct BasePath {
    path: PathBuf,
}

impl Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

fn executable_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|e| e.file_name().map(|s| s.to_os_string()))
        .and_then(|w| w.into_string().ok())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").into())
}

impl BasePath {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a base path under the platform's standard local-data directory.
    pub fn from_project() -> Self {
        Self {
            path: directories::ProjectDirs::from("", "", &executable_name())
                .expect("app directories exist on all supported platforms; qed")
                .data_local_dir()
                .to_path_buf(),
        }
    }

    /// Directory for proofs generated by the `bench` command.
    pub fn proof_dir(&self) -> PathBuf {
        let path = self.path.join("proofs").join("consensus");
        std::fs::create_dir_all(&path).unwrap_or_else(|e| {
            panic!("failed to create proof directory at {}: {e}", path.display())
        });
        path
    }
}
