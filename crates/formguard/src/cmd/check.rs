use std::fs;

use formguard::forms::{lookup, BUILTIN_FORMS};
use formguard_schema::{FieldValues, SchemaConfig};
use formguard_session::{FormSubmission, SubmitOutcome, ValidationSession};
use tracing::info;

use crate::cmd::CheckArgs;
use crate::exit::{io_error, schema_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_report, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = lookup(&args.form).ok_or_else(|| {
        CliError::new(
            USAGE,
            format!(
                "unknown form {} (expected one of: {})",
                args.form,
                BUILTIN_FORMS.join(", ")
            ),
        )
    })?;
    let config = SchemaConfig {
        reject_unknown_fields: args.strict,
    };
    let mut session = ValidationSession::with_config(schema, config)
        .map_err(|err| schema_error("invalid form schema", err))?;

    let values = resolve_values(&args)?;
    let mut event = FormSubmission::new(args.form.as_str());

    let outcome = {
        let mut guard = session.handle_submit(
            &values,
            |event: &mut FormSubmission| info!(form = event.form(), "submission accepted"),
            |event: &mut FormSubmission| info!(form = event.form(), "submission rejected"),
        );
        guard(&mut event).map_err(|err| schema_error("validation failed", err))?
    };

    print_report(&args.form, outcome, session.errors(), format);

    Ok(match outcome {
        SubmitOutcome::Accepted => SUCCESS,
        SubmitOutcome::Rejected => DATA_INVALID,
    })
}

fn resolve_values(args: &CheckArgs) -> CliResult<FieldValues> {
    let json = if let Some(json) = &args.json {
        json.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?
    } else {
        return Err(CliError::new(USAGE, "one of --json or --file is required"));
    };

    FieldValues::from_json(&json).map_err(|err| schema_error("invalid values", err))
}
