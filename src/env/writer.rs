use crate::{error::Error, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

pub const ENV_FILE_PATH: &str = ".env";

/// Escapes `;` as `\;`, the form IntelliJ run configurations expect in env files.
pub fn escape_line(line: &str) -> String {
    line.replace(';', "\\;")
}

/// Truncates or creates `path` and writes one escaped line per entry.
///
/// The handle is released before returning on every path. A failure part way
/// through leaves whatever was already written.
pub fn write_env_file<P>(path: P, lines: &[String]) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::CreateEnvFileFail {
        path: path.to_owned(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", escape_line(line)).map_err(|source| Error::WriteEnvFileFail {
            path: path.to_owned(),
            source,
        })?;
    }
    let file = writer
        .into_inner()
        .map_err(|err| Error::CloseEnvFileFail {
            path: path.to_owned(),
            source: err.into_error(),
        })?;
    file.sync_all().map_err(|source| Error::CloseEnvFileFail {
        path: path.to_owned(),
        source,
    })?;
    info!("wrote {} lines to {:?}", lines.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn escapes_every_semicolon() {
        assert_eq!(escape_line("A=a;b;c"), "A=a\\;b\\;c");
        assert_eq!(escape_line("PLAIN=value"), "PLAIN=value");
    }

    #[test]
    fn escaping_is_applied_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        write_env_file(&path, &["A=a;b".to_owned()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A=a\\;b\n");
    }

    #[test]
    fn writes_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        let lines = vec!["FOO=bar".to_owned(), "A=1".to_owned(), "FOO=baz".to_owned()];
        write_env_file(&path, &lines).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "FOO=bar\nA=1\nFOO=baz\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "STALE=1\nOLD=2\nMORE=3\n").unwrap();
        write_env_file(&path, &["NEW=1".to_owned()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW=1\n");
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        write_env_file(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_directory_fails_on_create() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(".env");
        let err = write_env_file(&path, &["A=1".to_owned()]).unwrap_err();
        assert!(matches!(err, Error::CreateEnvFileFail { .. }));
    }
}
