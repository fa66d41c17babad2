use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use formguard_constraint::FieldKind;
use formguard_schema::ValidationErrors;
use formguard_session::SubmitOutcome;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    form: &'a str,
    outcome: &'static str,
    errors: &'a ValidationErrors,
}

#[derive(Serialize)]
struct FormOutput<'a> {
    form: &'a str,
    fields: Vec<FieldOutput<'a>>,
}

#[derive(Serialize)]
struct FieldOutput<'a> {
    name: &'a str,
    kind: FieldKind,
}

pub fn print_report(
    form: &str,
    outcome: SubmitOutcome,
    errors: &ValidationErrors,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let out = ReportOutput {
                form,
                outcome: outcome.as_str(),
                errors,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            if errors.is_empty() {
                println!("{form}: {}", outcome.as_str());
                return;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "MESSAGE"]);
            for (field, message) in errors.iter() {
                table.add_row(vec![field, message]);
            }
            println!("{form}: {}", outcome.as_str());
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("form={form} outcome={}", outcome.as_str());
            for (field, message) in errors.iter() {
                println!("  {field}: {message}");
            }
        }
    }
}

/// Print built-in forms as `(name, fields)` pairs.
pub fn print_forms(forms: &[(&str, Vec<(&str, FieldKind)>)], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<FormOutput<'_>> = forms
                .iter()
                .map(|(form, fields)| FormOutput {
                    form,
                    fields: fields
                        .iter()
                        .map(|(name, kind)| FieldOutput { name, kind: *kind })
                        .collect(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FORM", "FIELD", "KIND"]);
            for (form, fields) in forms {
                for (name, kind) in fields {
                    table.add_row(vec![*form, *name, kind.as_str()]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (form, fields) in forms {
                let described: Vec<String> = fields
                    .iter()
                    .map(|(name, kind)| format!("{name}:{kind}"))
                    .collect();
                println!("{form} {}", described.join(" "));
            }
        }
    }
}
