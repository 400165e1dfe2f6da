use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;

#[derive(Clone, Debug)]
pub struct Config {
    pub binary: String,
}

pub fn version(config: &Config) -> Result<String, Error> {
    run_engine(Command::new(&config.binary).arg("-v"))
}

pub fn build(config: &Config, context_dir: &Path) -> Result<String, Error> {
    run_engine(
        Command::new(&config.binary)
            .arg("build")
            .arg("--no-cache")
            .arg(context_dir),
    )
}

fn run_engine(command: &mut Command) -> Result<String, Error> {
    let output = command.output().map_err(Error::Invoke)?;
    let stdout = to_text(&output.stdout);

    if output.status.success() {
        Ok(stdout)
    } else {
        // The engine writes build diagnostics to stderr, prefer stdout when present
        let captured = if stdout.is_empty() {
            to_text(&output.stderr)
        } else {
            stdout
        };

        Err(Error::ExitFailure { output: captured })
    }
}

fn to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

#[derive(Debug)]
pub enum Error {
    Invoke(io::Error),
    ExitFailure { output: String },
}

impl Error {
    // Text to surface to the client, empty if the process never produced any
    pub fn captured_output(&self) -> String {
        match self {
            Error::Invoke(_) => String::new(),

            Error::ExitFailure { output } => output.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Invoke(err) => {
                write!(f, "Failed to invoke engine binary: {}", err)
            }

            Error::ExitFailure { output } => {
                write!(f, "Engine exited with failure: {}", output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn fake_engine(dir: &Path, script: &str) -> Config {
        let path = dir.join("engine.sh");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        Config {
            binary: path.to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn version_captures_stdout() {
        let tmp = tempfile::tempdir().unwrap();
        let config = fake_engine(tmp.path(), "#!/bin/sh\necho 'Docker version 20.10.7'\n");

        let version = version(&config).unwrap();

        assert_eq!(version, "Docker version 20.10.7");
    }

    #[test]
    fn version_nonzero_exit_captures_output() {
        let tmp = tempfile::tempdir().unwrap();
        let config = fake_engine(
            tmp.path(),
            "#!/bin/sh\necho 'docker: command not found'\nexit 127\n",
        );

        let err = version(&config).unwrap_err();

        assert_eq!(err.captured_output(), "docker: command not found");
    }

    #[test]
    fn version_missing_binary_captures_nothing() {
        let config = Config {
            binary: "/nonexistent/engine".to_string(),
        };

        let err = version(&config).unwrap_err();

        assert_eq!(err.captured_output(), "");
    }

    #[test]
    fn build_passes_no_cache_flag_and_context_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = fake_engine(tmp.path(), "#!/bin/sh\necho \"$1 $2 $3\"\n");

        let output = build(&config, Path::new("./resources")).unwrap();

        assert_eq!(output, "build --no-cache ./resources");
    }

    #[test]
    fn build_failure_falls_back_to_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let config = fake_engine(
            tmp.path(),
            "#!/bin/sh\necho 'ERROR: failed to solve' >&2\nexit 1\n",
        );

        let err = build(&config, Path::new("./resources")).unwrap_err();

        assert_eq!(err.captured_output(), "ERROR: failed to solve");
    }
}
