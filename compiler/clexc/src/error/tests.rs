use std::error::Error as _;

use super::*;

#[test]
fn read_not_found_message() {
    let err = CliError::Read {
        path: PathBuf::from("missing.c"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(err.to_string(), "cannot find file 'missing.c'");
    assert!(err.source().is_some());
}

#[test]
fn read_permission_message() {
    let err = CliError::Read {
        path: PathBuf::from("secret.c"),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    };
    assert_eq!(err.to_string(), "permission denied reading 'secret.c'");
}

#[test]
fn read_invalid_utf8_message() {
    let err = CliError::Read {
        path: PathBuf::from("bin.c"),
        source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };
    assert_eq!(err.to_string(), "'bin.c' contains invalid UTF-8 data");
}

#[test]
fn write_message_includes_cause() {
    let err = CliError::Write {
        path: PathBuf::from("out/result.txt"),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };
    assert_eq!(err.to_string(), "error writing 'out/result.txt': disk full");
}

#[test]
fn usage_messages() {
    assert_eq!(
        CliError::MissingValue("-o".into()).to_string(),
        "option '-o' requires a value"
    );
    assert_eq!(
        CliError::UnknownOption("-x".into()).to_string(),
        "unknown option '-x'"
    );
}

#[test]
fn terminal_error_from_io() {
    let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
    assert_eq!(err.to_string(), "error writing to terminal: pipe closed");
}

#[test]
fn too_large_message() {
    let err = CliError::TooLarge {
        path: PathBuf::from("huge.c"),
        len: MAX_SOURCE_LEN + 1,
    };
    assert_eq!(
        err.to_string(),
        format!(
            "'huge.c' is too large to scan ({} bytes, limit {} bytes)",
            MAX_SOURCE_LEN + 1,
            u32::MAX
        )
    );
}
