//! Common constants used throughout mcp-forge.

/// Python version constraint written into generated projects by default
pub const DEFAULT_PYTHON_VERSION: &str = ">=3.10";

/// Suffix appended to the project name when no description is given
pub const DEFAULT_DESCRIPTION_SUFFIX: &str = "MCP server";

/// Transports every generated server ships an entry point for
pub const TRANSPORTS: [&str; 3] = ["stdio", "http", "sse"];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
