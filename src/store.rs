use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::models::User;

/// File-backed credential store. The whole user list is loaded fresh on
/// every request that touches it and written back in full on mutation.
/// There is no lock around the read-modify-write cycle, so concurrent
/// mutations race (last writer wins on the entire file).
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UserStore { path: path.into() }
    }

    /// Reads all users. An absent file is created empty; an unreadable or
    /// unparseable file is logged and treated as empty rather than failing
    /// the request.
    pub fn load(&self) -> Vec<User> {
        if !self.path.exists() {
            if let Err(err) = fs::write(&self.path, "[]") {
                warn!("could not create users file {:?}: {err}", self.path);
            }
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("could not read users file {:?}: {err}", self.path);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(err) => {
                warn!("users file {:?} is not valid JSON: {err}", self.path);
                Vec::new()
            }
        }
    }

    /// Overwrites the backing file with the full user list. Plain overwrite,
    /// not atomic; IO failures are surfaced to the caller.
    pub fn save(&self, users: &[User]) -> io::Result<()> {
        let body = serde_json::to_string_pretty(users)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, body)
    }
}
