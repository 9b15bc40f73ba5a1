//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Token, server URL, workspace, and target resolution
//! - `loading`: Environment and CLI loading through `load_from_iter`
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod operation_mode;
