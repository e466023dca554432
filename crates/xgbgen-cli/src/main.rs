use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

mod commands;
mod error;

use commands::check::handle_check;
use commands::generate::handle_generate;
use commands::SourceArgs;

#[derive(Parser, Debug)]
#[command(name = "xgbgen")]
#[command(about = "Resolves xcb protocol descriptions and prints their outline", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Resolve a description and write its outline
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Resolve a description without emitting anything
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match &args.command {
        Command::Generate { source, output } => handle_generate(source, output.as_ref())?,
        Command::Check { source } => handle_check(source)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_arguments() {
        let args = Args::try_parse_from([
            "xgbgen",
            "generate",
            "xproto",
            "--proto-path",
            "/usr/share/xcb",
            "--output",
            "xproto.txt",
            "--wire-config",
            "wire.toml",
        ])
        .unwrap();

        match args.command {
            Command::Generate { source, output } => {
                assert_eq!(source.name, "xproto");
                assert_eq!(source.proto_path, PathBuf::from("/usr/share/xcb"));
                assert_eq!(source.wire_config, Some(PathBuf::from("wire.toml")));
                assert_eq!(output, Some(PathBuf::from("xproto.txt")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn proto_path_defaults_to_current_dir() {
        let args = Args::try_parse_from(["xgbgen", "-v", "check", "render"]).unwrap();
        match args.command {
            Command::Check { source } => assert_eq!(source.proto_path, PathBuf::from(".")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
