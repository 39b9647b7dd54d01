mod directory_ensurer;
mod ensure_error;
mod path_validator;

pub use directory_ensurer::{DirectoryEnsurer, ensure_directory, ensure_directory_exists};
pub use ensure_error::{EnsureError, EnsureOutcome};
pub use path_validator::validate_directory_exists;
