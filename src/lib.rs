//! awsconf - Assume an IAM role and export temporary AWS credentials to
//! your shell dotfile.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal reporter
//! │   └── prompt        # MFA code prompt
//! └── core/             # Core library components
//!     ├── config        # ~/.awsconf.toml and SelectedConfig
//!     ├── profile       # ~/.aws/config inspection
//!     ├── auth          # Caller authentication strategies
//!     ├── assume        # Target role assumption
//!     ├── session       # Session names
//!     ├── credentials   # Temporary credentials
//!     ├── dotfile       # Dotfile reconciliation
//!     ├── report        # Reporter trait
//!     └── bootstrap     # The end-to-end flow
//! ```
//!
//! # Flow
//!
//! 1. Resolve a configuration key to a target role and an AWS profile
//! 2. Inspect the profile for its own `role_arn` / `mfa_serial`
//! 3. Authenticate as the profile, escalating (with MFA) if it asks to
//! 4. Assume the target role with a random session name
//! 5. Merge the credentials into the shell dotfile

pub mod cli;
pub mod core;
pub mod error;
