use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

/// Name of the file the generator writes
pub const OUTPUT_NAME: &str = "text.txt";

/// Path of the `fill-file` binary built by cargo for this test run
const BINARY_PATH: &str = env!("CARGO_BIN_EXE_fill-file");

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
///
/// Each fixture owns a temporary directory that doubles as the working
/// directory of the binary under test.
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn empty() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::empty();
        fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        fixture
    }

    /// Create fixture with a directory in place of a file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or the subdirectory cannot be created.
    pub fn with_dir(name: &str) -> Self {
        let fixture = Self::empty();
        fs::create_dir(fixture.root_dir.path().join(name)).unwrap();
        fixture
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).is_file()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Names of all entries in the fixture directory, sorted
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be listed.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Path of the fixture's working directory
    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run `fill-file` inside the fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    pub async fn run(&self, args: &[&str]) -> Output {
        let raw_output = tokio::process::Command::new(BINARY_PATH)
            .args(args)
            .current_dir(self.root_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .unwrap();

        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
