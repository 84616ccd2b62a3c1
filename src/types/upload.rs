use std::collections::HashMap;
use std::path::PathBuf;

/// One file descriptor delivered by the transport layer: the client's
/// original filename, where the transport parked the bytes, the declared
/// size and MIME type, and the transport's own error code (0 = none).
///
/// The gate trusts the declared size and MIME type; it does no content
/// sniffing of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub tmp_path: PathBuf,
    pub size: u64,
    pub mime: String,
    pub transport_error: u16,
}

impl FileUpload {
    #[must_use]
    pub fn new(file_name: &str, tmp_path: impl Into<PathBuf>, size: u64, mime: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            tmp_path: tmp_path.into(),
            size,
            mime: mime.to_owned(),
            transport_error: 0,
        }
    }

    /// Attach the transport's non-zero error code to this descriptor.
    #[must_use]
    pub fn with_transport_error(mut self, code: u16) -> Self {
        self.transport_error = code;
        self
    }
}

/// The per-request map of upload input slots, the explicit stand-in for an
/// ambient files array. The gate looks up its configured input name here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uploads {
    slots: HashMap<String, FileUpload>,
}

impl Uploads {
    /// Create an empty slot map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a descriptor under an input slot name. Consuming builder form.
    #[must_use]
    pub fn slot(mut self, input_name: &str, upload: FileUpload) -> Self {
        self.insert(input_name, upload);
        self
    }

    /// Insert a descriptor (mutable reference version).
    pub fn insert(&mut self, input_name: &str, upload: FileUpload) {
        self.slots.insert(input_name.to_owned(), upload);
    }

    /// The descriptor for an input slot, if the request carried one.
    #[must_use]
    pub fn get(&self, input_name: &str) -> Option<&FileUpload> {
        self.slots.get(input_name)
    }
}

/// The record of a committed upload: the client's original name, the name
/// the file was stored under, the extension derived from the original name,
/// and the declared size and MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredFile {
    pub original_name: String,
    pub stored_name: String,
    pub extension: String,
    pub size: u64,
    pub mime: String,
}
