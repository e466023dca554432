use std::path::PathBuf;

use xgbgen_codegen::OutlineEmitter;

use crate::commands::SourceArgs;
use crate::error::{convert_io_error, CliError};

/// Writes the outline of `args.name` to `output`, or to stdout.
pub fn handle_generate(args: &SourceArgs, output: Option<&PathBuf>) -> Result<(), CliError> {
    let text = args.generator()?.generate(&args.name, &mut OutlineEmitter::new())?;
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .map_err(|e| convert_io_error(e, path.clone(), "writing output to"))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
