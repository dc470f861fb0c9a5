//! mcp-forge is a scaffolding tool for MCP (Model Context Protocol) servers.
//! It maps a project name and a set of feature toggles to a manifest of bundled
//! templates and renders that manifest into a new project directory.

/// Command-line interface module for the mcp-forge application
pub mod cli;

/// Project configuration, feature toggles and settings files
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the mcp-forge application
pub mod error;

/// Logger setup
pub mod logger;

/// Manifest selection: which directories and files a project gets
pub mod manifest;

/// Project materialization
/// Checks the destination, renders every manifest entry and writes the tree
pub mod processor;

/// Template rendering functionality
pub mod renderer;

/// Templates bundled into the binary
pub mod templates;
