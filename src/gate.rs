use std::fs;

use log::{debug, warn};

use crate::types::{FileUpload, Rejection, StoredFile, UploadPolicy, Uploads};

/// The sequential admission pipeline. Each check short-circuits with its
/// rejection code; the filesystem is touched only after every check passed.
pub(crate) fn admit(
    policy: &UploadPolicy,
    uploads: &Uploads,
    override_name: Option<&str>,
    keep_extension: bool,
) -> Result<StoredFile, Rejection> {
    let upload = uploads
        .get(&policy.input_name)
        .ok_or(Rejection::NoUpload)?;

    check_type(policy, upload)?;
    check_size(policy, upload)?;
    check_transport(upload)?;

    // The collision check runs against the chosen base name, before the
    // extension is appended.
    let base_name = override_name.unwrap_or(&upload.file_name);
    if !policy.overwrite && policy.save_path.join(base_name).exists() {
        return Err(Rejection::AlreadyExists);
    }

    let extension = extract_extension(&upload.file_name);
    let stored_name = if keep_extension {
        format!("{base_name}.{extension}")
    } else {
        base_name.to_owned()
    };

    let destination = policy.save_path.join(&stored_name);
    if let Err(err) = fs::rename(&upload.tmp_path, &destination) {
        warn!(
            "failed to move '{}' to '{}': {err}",
            upload.tmp_path.display(),
            destination.display()
        );
        return Err(Rejection::MoveFailed);
    }

    debug!("admitted '{}' as '{stored_name}'", upload.file_name);

    Ok(StoredFile {
        original_name: upload.file_name.clone(),
        stored_name,
        extension: extension.to_owned(),
        size: upload.size,
        mime: upload.mime.clone(),
    })
}

/// An empty allow-list admits everything; otherwise either the declared
/// MIME type or the original filename's extension must be a member.
/// Comparisons are case-sensitive.
fn check_type(policy: &UploadPolicy, upload: &FileUpload) -> Result<(), Rejection> {
    if policy.allowed_types.is_empty() {
        return Ok(());
    }
    let extension = extract_extension(&upload.file_name);
    if policy
        .allowed_types
        .iter()
        .any(|t| t.as_str() == upload.mime || t.as_str() == extension)
    {
        Ok(())
    } else {
        Err(Rejection::TypeNotAllowed)
    }
}

/// Exact byte comparison against the kilobyte limit; a limit of 0 means
/// unlimited.
fn check_size(policy: &UploadPolicy, upload: &FileUpload) -> Result<(), Rejection> {
    if policy.max_size_kb > 0 && upload.size > policy.max_size_kb * 1024 {
        Err(Rejection::TooLarge)
    } else {
        Ok(())
    }
}

fn check_transport(upload: &FileUpload) -> Result<(), Rejection> {
    if upload.transport_error != 0 {
        Err(Rejection::Transport(upload.transport_error))
    } else {
        Ok(())
    }
}

/// The text after the last `.` of a filename. A dotless name yields the
/// whole name as its "extension".
fn extract_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(file_name: &str, size: u64, mime: &str) -> FileUpload {
        FileUpload::new(file_name, "/tmp/upl_test", size, mime)
    }

    #[test]
    fn extension_after_last_dot() {
        assert_eq!(extract_extension("report.pdf"), "pdf");
        assert_eq!(extract_extension("report.v2.tar.gz"), "gz");
        assert_eq!(extract_extension("archive."), "");
    }

    #[test]
    fn dotless_name_is_its_own_extension() {
        assert_eq!(extract_extension("README"), "README");
    }

    #[test]
    fn empty_allow_list_admits_any_type() {
        let policy = UploadPolicy::new();
        assert!(check_type(&policy, &descriptor("x.exe", 1, "application/octet-stream")).is_ok());
    }

    #[test]
    fn type_matches_extension_or_mime() {
        let policy = UploadPolicy::new().allow_types(&["pdf", "image/png"]);
        assert!(check_type(&policy, &descriptor("a.pdf", 1, "application/pdf")).is_ok());
        assert!(check_type(&policy, &descriptor("a.bin", 1, "image/png")).is_ok());
        assert_eq!(
            check_type(&policy, &descriptor("a.exe", 1, "application/octet-stream")),
            Err(Rejection::TypeNotAllowed)
        );
    }

    #[test]
    fn type_comparison_is_case_sensitive() {
        let policy = UploadPolicy::new().allow_types(&["pdf"]);
        assert_eq!(
            check_type(&policy, &descriptor("a.PDF", 1, "application/octet-stream")),
            Err(Rejection::TypeNotAllowed)
        );
    }

    #[test]
    fn size_boundary_is_exact() {
        let policy = UploadPolicy::new().max_size_kb(100);
        assert!(check_size(&policy, &descriptor("a.pdf", 102_400, "application/pdf")).is_ok());
        assert_eq!(
            check_size(&policy, &descriptor("a.pdf", 102_401, "application/pdf")),
            Err(Rejection::TooLarge)
        );
    }

    #[test]
    fn zero_limit_disables_size_check() {
        let policy = UploadPolicy::new().max_size_kb(0);
        assert!(check_size(&policy, &descriptor("a.bin", u64::MAX, "application/x")).is_ok());
    }

    #[test]
    fn transport_error_passes_code_through() {
        let upload = descriptor("a.pdf", 1, "application/pdf").with_transport_error(4);
        assert_eq!(check_transport(&upload), Err(Rejection::Transport(4)));
        assert!(check_transport(&descriptor("a.pdf", 1, "application/pdf")).is_ok());
    }
}
