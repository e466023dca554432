use crate::commands::SourceArgs;
use crate::error::CliError;

/// Runs every pass short of emission and reports whether they succeeded.
pub fn handle_check(args: &SourceArgs) -> Result<(), CliError> {
    let document = args.generator()?.prepare(&args.name)?;
    println!(
        "{}: {} imports, {} types, {} requests, {} events, {} errors",
        args.name,
        document.imports.len(),
        document.resources.len()
            + document.resource_unions.len()
            + document.type_aliases.len()
            + document.structs.len()
            + document.unions.len(),
        document.requests.len(),
        document.events.len() + document.event_aliases.len(),
        document.errors.len() + document.error_aliases.len(),
    );
    Ok(())
}
