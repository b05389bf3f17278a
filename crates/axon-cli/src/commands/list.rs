//! Implementation of the `axon list` command.

use axon_adapters::BuiltinGenerator;
use axon_core::ports::Generator;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let generator = BuiltinGenerator::new();
    let templates = generator.available_templates();
    let licenses = generator.available_licenses();

    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for template in &templates {
                output.print(&format!("  {template}"))?;
            }
            output.print("")?;
            output.header("Available licenses:")?;
            for license in &licenses {
                output.print(&format!("  {license}"))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                println!("{template}");
            }
        }

        ListFormat::Json => {
            // Straight to stdout: JSON output must be parseable even in
            // non-TTY pipes and quiet mode.
            let payload = serde_json::json!({
                "templates": templates,
                "licenses": licenses,
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".into()));
        }
    }

    Ok(())
}
