use formguard::forms::{lookup, BUILTIN_FORMS};

use crate::cmd::FormsArgs;
use crate::exit::{CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::{print_forms, OutputFormat};

pub fn run(_args: FormsArgs, format: OutputFormat) -> CliResult<i32> {
    let schemas = BUILTIN_FORMS
        .iter()
        .map(|name| {
            lookup(name)
                .map(|schema| (*name, schema))
                .ok_or_else(|| CliError::new(INTERNAL, format!("built-in form {name} missing")))
        })
        .collect::<CliResult<Vec<_>>>()?;

    let described: Vec<_> = schemas
        .iter()
        .map(|(name, schema)| (*name, schema.fields().collect::<Vec<_>>()))
        .collect();
    print_forms(&described, format);

    Ok(SUCCESS)
}
