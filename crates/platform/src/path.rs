//! Path segment joining

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Concatenate `base`, the platform separator and `segment`.
///
/// Unlike [`Path::join`], an absolute `segment` does not replace `base`, and
/// neither `..` nor symlinks are resolved. An empty `segment` yields `base`
/// followed by a trailing separator.
#[must_use]
pub fn join(base: &Path, segment: &str) -> PathBuf {
    let mut joined = OsString::with_capacity(base.as_os_str().len() + 1 + segment.len());
    joined.push(base.as_os_str());
    joined.push(MAIN_SEPARATOR_STR);
    joined.push(segment);
    PathBuf::from(joined)
}
