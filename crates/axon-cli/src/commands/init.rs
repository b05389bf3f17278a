//! Implementation of the `axon init` command.
//!
//! Responsibility: translate CLI arguments into [`InitOptions`], wire the
//! production adapters into the wizard, and display the outcome.  No
//! wizard logic lives here.

use tracing::{debug, info, instrument};

use axon_adapters::{BuiltinGenerator, DialoguerPrompter, FileProfileStore, StaticRuntime};
use axon_core::{
    options::{InitOptions, WizardOutcome},
    wizard::InitWizard,
};

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `axon init` command.
#[instrument(skip_all, fields(cwd = %args.cwd.display()))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build the run options.  CLI flag beats config default beats the
    //    wizard's own template resolution.
    let mut options = InitOptions::new(args.cwd);
    if let Some(template) = resolve_template(args.template, &config) {
        options = options.with_template(template);
    }
    if let Some(force) = args.force {
        options = options.with_force(force.into());
    }

    debug!(
        template = %options.template,
        force = options.force.map(|f| f.as_str()).unwrap_or("ask"),
        "Options resolved"
    );

    // 2. Wire the production adapters.
    let profile = match &config.profile.path {
        Some(path) => FileProfileStore::load_from(path),
        None => FileProfileStore::load_default(),
    };

    let wizard = InitWizard::new(
        Box::new(BuiltinGenerator::new()),
        Box::new(DialoguerPrompter::new()),
        Box::new(profile),
        Box::new(StaticRuntime::new(config.runtime.version.clone())),
        Box::new(output.reporter()),
    );

    // 3. Run and report.  Cancel and abort are successful completions;
    //    the wizard has already told the user.
    match wizard.run(&mut options)? {
        WizardOutcome::Generated => {
            info!(cwd = %options.cwd.display(), "Scaffold generated");
            output.success(&format!(
                "Package scaffolded in {}",
                options.cwd.display()
            ))?;
            if !global.quiet {
                output.print("")?;
                output.print("Next steps:")?;
                output.print(&format!("  cd {}", options.cwd.display()))?;
                output.print("  # Start building!")?;
            }
        }
        outcome @ (WizardOutcome::Cancelled | WizardOutcome::Aborted) => {
            debug!(?outcome, "Run ended without generating");
        }
    }

    Ok(())
}

/// Pick the template request: the CLI flag wins, then the config default.
/// `None` leaves the wizard's own resolution in charge.
fn resolve_template(flag: Option<String>, config: &AppConfig) -> Option<String> {
    flag.or_else(|| config.defaults.template.clone())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_beats_config_default() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("default".into());
        let resolved = resolve_template(Some("neuron".into()), &config);
        assert_eq!(resolved.as_deref(), Some("neuron"));
    }

    #[test]
    fn config_default_applies_without_flag() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("neuron".into());
        assert_eq!(resolve_template(None, &config).as_deref(), Some("neuron"));
    }

    #[test]
    fn no_flag_and_no_config_leaves_resolution_to_the_wizard() {
        assert_eq!(resolve_template(None, &AppConfig::default()), None);
    }
}
