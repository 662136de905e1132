//! CLI structure for mdl2obj

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdl2obj")]
#[command(about = "Convert Quake MDL models to Wavefront OBJ", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the input MDL file
    pub input: PathBuf,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requires_exactly_one_input() {
        assert!(Cli::try_parse_from(["mdl2obj"]).is_err());
        assert!(Cli::try_parse_from(["mdl2obj", "a.mdl", "b.mdl"]).is_err());
        assert!(Cli::try_parse_from(["mdl2obj", "a.mdl"]).is_ok());
    }
}
