mod gate;
mod parse;
mod types;
mod validate;

pub use parse::{parse_rule, RuleSpec};
pub use types::{
    FieldError, FileUpload, Outcome, Rejection, Report, RuleEntry, StoredFile, Submission,
    UnknownFieldError, UnrecognizedRule, UploadPolicy, Uploads, Validator, DEFAULT_INPUT_NAME,
    DEFAULT_MAX_SIZE_KB, DEFAULT_SAVE_PATH,
};
