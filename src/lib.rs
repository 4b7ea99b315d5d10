//! Workspace root package.
//!
//! Holds workspace-level tooling such as the `rusty-hook` pre-commit hook. The
//! function itself lives in the crates under `crates/`.
