use std::path::{Path, PathBuf};

use clap::Args;
use xgbgen_driver::Generator;
use xgbgen_resolve::WireConfig;

use crate::error::CliError;

pub mod check;
pub mod generate;

/// Options shared by every command that reads descriptions.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Description name; the file read is `<PROTO_PATH>/<NAME>.xml`
    #[arg(value_name = "NAME")]
    pub name: String,
    /// Directory holding the description files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub proto_path: PathBuf,
    /// TOML file overriding the wire size table
    #[arg(short, long, value_name = "FILE")]
    pub wire_config: Option<PathBuf>,
}

impl SourceArgs {
    pub fn generator(&self) -> Result<Generator, CliError> {
        let generator = Generator::new(&self.proto_path);
        Ok(match &self.wire_config {
            Some(path) => generator.with_config(load_config(path)?),
            None => generator,
        })
    }
}

fn load_config(path: &Path) -> Result<WireConfig, CliError> {
    log::debug!("reading wire configuration from {}", path.display());
    Ok(WireConfig::from_path(path)?)
}
