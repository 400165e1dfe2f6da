use rand::RngCore;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

pub const RANDOM_FILE_SIZE: usize = 32;

// Uniquely named random file inside the build-context directory.
// The file is removed when the handle is dropped.
#[derive(Debug)]
pub struct RandomFile {
    file: tempfile::NamedTempFile,
}

impl RandomFile {
    pub fn create(dir: &Path) -> Result<RandomFile, Error> {
        let mut file = tempfile::Builder::new()
            .prefix("random-")
            .tempfile_in(dir)
            .map_err(Error::Create)?;

        let mut bytes = [0u8; RANDOM_FILE_SIZE];
        rand::thread_rng().fill_bytes(&mut bytes);

        file.write_all(&bytes).map_err(Error::Write)?;

        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644))
            .map_err(Error::SetPermissions)?;

        Ok(RandomFile { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[derive(Debug)]
pub enum Error {
    Create(io::Error),
    Write(io::Error),
    SetPermissions(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Create(err) => {
                write!(f, "Failed to create random file in build context: {}", err)
            }

            Error::Write(err) => {
                write!(f, "Failed to write random file: {}", err)
            }

            Error::SetPermissions(err) => {
                write!(f, "Failed to set permissions on random file: {}", err)
            }
        }
    }
}
