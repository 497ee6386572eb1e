//! Command implementations, one module per subcommand.

pub mod check;
pub mod press;
pub mod serve;
