//! In-memory fakes for use case tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::ports::{
    CommandRunner, ExternalProcessError, FileSystem, FsError, FsResult, StdioMode,
};
use crate::domain::value_objects::CommandLine;

/// In-memory file system
#[derive(Default)]
pub struct MockFileSystem {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    fail_writes_to: RefCell<BTreeSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_vec());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.borrow_mut().insert(path.into());
        self
    }

    /// Make writes to `path` fail with permission denied
    pub fn fail_writes_to(self, path: impl Into<PathBuf>) -> Self {
        self.fail_writes_to.borrow_mut().insert(path.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.files.borrow().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.fail_writes_to.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }
}

/// Command runner that records invocations and returns scripted exit codes
#[derive(Default)]
pub struct FakeRunner {
    exit_codes: HashMap<String, i32>,
    missing: BTreeSet<String>,
    calls: RefCell<Vec<(String, StdioMode)>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command whose program is `program` exits with `code`
    pub fn exit_with(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    /// `program` cannot be spawned
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    /// Rendered command lines, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn stdio_modes(&self) -> Vec<StdioMode> {
        self.calls.borrow().iter().map(|(_, m)| *m).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &CommandLine, stdio: StdioMode) -> Result<(), ExternalProcessError> {
        self.calls.borrow_mut().push((command.to_string(), stdio));

        if self.missing.contains(command.program()) {
            return Err(ExternalProcessError::Spawn {
                program: command.program().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        match self.exit_codes.get(command.program()).copied().unwrap_or(0) {
            0 => Ok(()),
            code => Err(ExternalProcessError::ExitStatus {
                command: command.to_string(),
                code: Some(code),
            }),
        }
    }

    fn is_available(&self, program: &str) -> bool {
        !self.missing.contains(program)
    }
}
