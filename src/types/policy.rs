use std::path::PathBuf;

use super::rejection::Rejection;
use super::upload::{StoredFile, Uploads};

/// Default destination directory for committed uploads.
pub const DEFAULT_SAVE_PATH: &str = "./";
/// Default size ceiling in kilobytes (2 MB).
pub const DEFAULT_MAX_SIZE_KB: u64 = 2048;
/// Default form input slot the gate reads its descriptor from.
pub const DEFAULT_INPUT_NAME: &str = "file";

/// Immutable admission policy for the upload gate.
///
/// Construct once, override the defaults with the consuming setters, then
/// call [`upload()`](UploadPolicy::upload) per incoming file. A policy is
/// read-only configuration: it can be shared across any number of calls,
/// each of which is an independent, single-shot decision.
///
/// # Example
///
/// ```no_run
/// use fieldgate::{FileUpload, UploadPolicy, Uploads};
///
/// let policy = UploadPolicy::new()
///     .allow_types(&["pdf", "application/pdf"])
///     .save_path("/var/uploads")
///     .max_size_kb(100);
///
/// let uploads = Uploads::new().slot(
///     "file",
///     FileUpload::new("report.pdf", "/tmp/upl_1", 51_200, "application/pdf"),
/// );
///
/// match policy.upload(&uploads, None, true) {
///     Ok(stored) => println!("saved as {}", stored.stored_name),
///     Err(rejection) => eprintln!("{}: {}", rejection.code(), rejection),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub(crate) allowed_types: Vec<String>,
    pub(crate) save_path: PathBuf,
    pub(crate) max_size_kb: u64,
    pub(crate) input_name: String,
    pub(crate) overwrite: bool,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_types: Vec::new(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            max_size_kb: DEFAULT_MAX_SIZE_KB,
            input_name: DEFAULT_INPUT_NAME.to_owned(),
            overwrite: false,
        }
    }
}

impl UploadPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict admission to the given MIME types and/or extensions.
    /// An empty list (the default) admits every type.
    #[must_use]
    pub fn allow_types(mut self, types: &[&str]) -> Self {
        self.allowed_types = types.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    /// The directory committed uploads are moved into.
    #[must_use]
    pub fn save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// The size ceiling in kilobytes. 0 disables the size check.
    #[must_use]
    pub fn max_size_kb(mut self, kb: u64) -> Self {
        self.max_size_kb = kb;
        self
    }

    /// The form input slot the gate reads its descriptor from.
    #[must_use]
    pub fn input_name(mut self, name: &str) -> Self {
        self.input_name = name.to_owned();
        self
    }

    /// Allow a committed upload to replace an existing destination file.
    #[must_use]
    pub fn overwrite(mut self, allowed: bool) -> Self {
        self.overwrite = allowed;
        self
    }

    /// Run the admission checks against the configured input slot and, on
    /// full success, move the file into the save directory.
    ///
    /// `override_name` replaces the stored base name (the original filename
    /// is used when `None`); `keep_extension` appends the original
    /// filename's extension to whichever base name was chosen.
    ///
    /// # Errors
    ///
    /// Returns the coded [`Rejection`] of the first failing check. Nothing
    /// on the filesystem changes on any rejection path; the temp file is
    /// moved only when every check passed.
    pub fn upload(
        &self,
        uploads: &Uploads,
        override_name: Option<&str>,
        keep_extension: bool,
    ) -> Result<StoredFile, Rejection> {
        crate::gate::admit(self, uploads, override_name, keep_extension)
    }
}
