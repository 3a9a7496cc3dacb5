use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::UserProfile;

/// Load the saved profile, or `None` if none has been saved yet.
///
/// A missing file is the normal first-run case, not an error; a present but
/// malformed file is.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Option<UserProfile>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    Ok(Some(profile))
}

/// Save the whole profile as pretty JSON, replacing any previous save.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Delete the saved profile. Returns whether there was one to delete.
pub fn delete_profile<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path)?;
    Ok(true)
}
