use std::io;

use mcp_forge::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forge_err: Error = io_err.into();

    match forge_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid settings".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid settings.");

    let err = Error::InvalidInput("project name must not be empty".to_string());
    assert_eq!(err.to_string(), "Invalid input: project name must not be empty.");

    let err = Error::DestinationExists { path: "my-server".to_string() };
    assert_eq!(err.to_string(), "Cannot proceed: directory 'my-server' already exists.");

    let err = Error::TemplateNotFound { template: "core/missing.py.j2".to_string() };
    assert_eq!(
        err.to_string(),
        "Template 'core/missing.py.j2' is not bundled with mcp-forge."
    );
}
