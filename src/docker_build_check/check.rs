use std::fmt;
use std::path::PathBuf;

use crate::docker_build_check::context;
use crate::docker_build_check::docker;

#[derive(Clone, Debug)]
pub struct Config {
    pub engine: docker::Config,
    pub context_dir: PathBuf,
}

// Terminal states of one build check. A failed build deliberately does not
// carry the version string that was already detected, a failure response
// contains only the captured output.
#[derive(Debug)]
pub enum Outcome {
    VersionCheckFailed { output: String },
    BuildFailed { output: String },
    Built { version: String, output: String },
}

pub fn run(config: &Config) -> Result<Outcome, Error> {
    let version = match docker::version(&config.engine) {
        Ok(version) => version,

        Err(err) => {
            log::error!("Engine version check failed: {}", err);
            return Ok(Outcome::VersionCheckFailed {
                output: err.captured_output(),
            });
        }
    };

    log::info!("Using docker client {}", version);

    // The random file must outlive the build invocation, it is removed
    // when this binding goes out of scope
    let _random_file = context::RandomFile::create(&config.context_dir)
        .map_err(Error::Context)?;

    match docker::build(&config.engine, &config.context_dir) {
        Ok(output) => Ok(Outcome::Built { version, output }),

        Err(err) => {
            log::error!("Image build failed: {}", err);
            Ok(Outcome::BuildFailed {
                output: err.captured_output(),
            })
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Context(context::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Context(err) => {
                write!(f, "Failed to prepare build context: {}", err)
            }
        }
    }
}
