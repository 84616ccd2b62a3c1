use thiserror::Error;

/// Why the gate refused an upload.
///
/// Each variant maps to a fixed numeric code callers can match on;
/// transport failures pass the transport's own code through unchanged.
/// Rejections are recoverable data, not faults: the caller may retry with
/// different input, but the gate itself never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// Code 101: the allow-list matched neither the MIME type nor the extension.
    #[error("File type not allowed")]
    TypeNotAllowed,

    /// Code 102: the declared size exceeds the policy limit.
    #[error("File size exceeds maximum allowed size")]
    TooLarge,

    /// Code 103: overwriting is disabled and the destination is occupied.
    #[error("File exists")]
    AlreadyExists,

    /// Code 104: the move out of the temp location failed.
    #[error("Unable to move uploaded file from temp directory. Check permissions.")]
    MoveFailed,

    /// Code 105: no descriptor was present for the configured input slot.
    #[error("No upload data received")]
    NoUpload,

    /// The transport reported its own non-zero error code for this upload.
    #[error("Upload error")]
    Transport(u16),
}

impl Rejection {
    /// The numeric rejection code.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Rejection::TypeNotAllowed => 101,
            Rejection::TooLarge => 102,
            Rejection::AlreadyExists => 103,
            Rejection::MoveFailed => 104,
            Rejection::NoUpload => 105,
            Rejection::Transport(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table() {
        assert_eq!(Rejection::TypeNotAllowed.code(), 101);
        assert_eq!(Rejection::TooLarge.code(), 102);
        assert_eq!(Rejection::AlreadyExists.code(), 103);
        assert_eq!(Rejection::MoveFailed.code(), 104);
        assert_eq!(Rejection::NoUpload.code(), 105);
    }

    #[test]
    fn transport_code_passes_through() {
        assert_eq!(Rejection::Transport(4).code(), 4);
        assert_eq!(Rejection::Transport(7).code(), 7);
    }

    #[test]
    fn messages() {
        assert_eq!(Rejection::TypeNotAllowed.to_string(), "File type not allowed");
        assert_eq!(
            Rejection::TooLarge.to_string(),
            "File size exceeds maximum allowed size"
        );
        assert_eq!(Rejection::AlreadyExists.to_string(), "File exists");
        assert_eq!(Rejection::NoUpload.to_string(), "No upload data received");
        assert_eq!(Rejection::Transport(4).to_string(), "Upload error");
    }
}
