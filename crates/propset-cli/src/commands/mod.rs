//! Command handlers. One module per subcommand; no argument definitions
//! here (those live in `crate::cli`).

pub mod apply;
pub mod completions;
pub mod show;
