use std::ffi::{OsStr, OsString};
use std::path::Path;

/// `photo.jpg` becomes `photo(n).jpg`; names without an extension get the
/// suffix appended.
pub fn numbered_file_name(file_name: &OsStr, n: u32) -> OsString {
    let path = Path::new(file_name);
    let mut name = path
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| file_name.to_os_string());
    name.push(format!("({n})"));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}
