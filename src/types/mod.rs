mod error;
mod outcome;
mod policy;
mod rejection;
mod report;
mod rule;
mod submission;
mod upload;
mod validator;

pub use error::{FieldError, UnknownFieldError};
pub use outcome::Outcome;
pub use policy::{UploadPolicy, DEFAULT_INPUT_NAME, DEFAULT_MAX_SIZE_KB, DEFAULT_SAVE_PATH};
pub use rejection::Rejection;
pub use report::{Report, UnrecognizedRule};
pub use rule::RuleEntry;
pub use submission::Submission;
pub use upload::{FileUpload, StoredFile, Uploads};
pub use validator::Validator;
