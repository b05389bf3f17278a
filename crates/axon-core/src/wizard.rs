//! Init Wizard - main orchestrator.
//!
//! This service walks the whole initialization flow in order:
//! 1. Inspect the working directory (is it empty?)
//! 2. Resolve the template
//! 3. Resolve the conflict strategy for a non-empty directory
//! 4. Collect package metadata through the questionnaire
//! 5. Confirm with the user
//! 6. Invoke the generation engine
//!
//! Each step suspends only at a collaborator call and resumes
//! synchronously; the run produces exactly one [`WizardOutcome`] or one
//! [`WizardError`].

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    error::{GenerationError, WizardError, WizardResult},
    options::{CONFLICT_CHOICES, DEFAULT_TEMPLATE, ForceMode, InitOptions, Metadata, WizardOutcome},
    ports::{GenerateRequest, Generator, ProfileStore, Prompter, Reporter, RuntimeInfo},
    schema::{PROFILE_FIELDS, base_schema},
};

const INTRO: &str = "\
This utility helps to create the basic scaffold for your axon package.
It will walk you through creating an axon.json and some other files.

Press ^C at any time to quit.
";

/// The init wizard, owning its collaborators for the duration of a run.
pub struct InitWizard {
    generator: Box<dyn Generator>,
    prompter: Box<dyn Prompter>,
    profile: Box<dyn ProfileStore>,
    runtime: Box<dyn RuntimeInfo>,
    reporter: Box<dyn Reporter>,
}

impl InitWizard {
    pub fn new(
        generator: Box<dyn Generator>,
        prompter: Box<dyn Prompter>,
        profile: Box<dyn ProfileStore>,
        runtime: Box<dyn RuntimeInfo>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            generator,
            prompter,
            profile,
            runtime,
            reporter,
        }
    }

    /// Run the wizard to completion.
    ///
    /// `options` is mutated in place: `empty`, `template`, `force`, and
    /// `pkg` are filled as the flow progresses.
    #[instrument(skip_all, fields(cwd = %options.cwd.display(), template = %options.template))]
    pub fn run(&self, options: &mut InitOptions) -> WizardResult<WizardOutcome> {
        self.reporter.info(INTRO);

        // 1. Inspect the working directory.
        options.empty = self.inspect_directory(&options.cwd)?;
        debug!(empty = options.empty, "Directory inspected");

        // 2. Resolve the template.
        options.template = self.select_template(&options.template)?;
        debug!(template = %options.template, "Template resolved");

        // 3. Resolve the conflict strategy. An empty directory is always
        //    safe to override; a pre-supplied mode skips the prompt.
        if options.empty {
            options.force = Some(ForceMode::Overriding);
        } else if options.force.is_none() {
            options.force = Some(self.resolve_conflict()?);
        }

        self.dispatch(options)
    }

    /// Route on the resolved force mode.
    fn dispatch(&self, options: &mut InitOptions) -> WizardResult<WizardOutcome> {
        match options.force {
            Some(ForceMode::Cancel) => {
                self.reporter.info("Cancelled by user.");
                Ok(WizardOutcome::Cancelled)
            }
            // Never offered by any prompt or CLI surface; completes
            // without doing anything rather than inventing an
            // update-in-place behavior.
            Some(ForceMode::Updating) => {
                debug!("updating mode requested; treated as no-op");
                self.reporter.info("Nothing to do.");
                Ok(WizardOutcome::Cancelled)
            }
            _ => self.collect_and_generate(options),
        }
    }

    // ── Step 1: directory inspector ───────────────────────────────────────

    /// `true` if `cwd` contains no entries. Read-only.
    fn inspect_directory(&self, cwd: &Path) -> WizardResult<bool> {
        let mut entries = std::fs::read_dir(cwd).map_err(|e| WizardError::DirectoryRead {
            path: cwd.to_path_buf(),
            source: e,
        })?;
        Ok(entries.next().is_none())
    }

    // ── Step 2: template selector ─────────────────────────────────────────

    /// Resolve the requested template name against the engine's list.
    ///
    /// Exactly one available template wins unconditionally; an explicit
    /// non-default request passes through unvalidated; otherwise the
    /// user picks from the list.
    fn select_template(&self, requested: &str) -> WizardResult<String> {
        let available = self.generator.available_templates();
        if available.len() == 1 {
            return Ok(available.into_iter().next().unwrap());
        }

        if requested != DEFAULT_TEMPLATE {
            return Ok(requested.to_string());
        }

        let choice = self.prompter.select(
            "Multiple templates found, choose the one you want to use.",
            &available,
        )?;
        Ok(choice)
    }

    // ── Step 3: conflict resolver ─────────────────────────────────────────

    fn resolve_conflict(&self) -> WizardResult<ForceMode> {
        let choices: Vec<String> = CONFLICT_CHOICES.iter().map(|c| c.to_string()).collect();
        let label = self.prompter.select(
            "The current directory is not empty, what should axon do?",
            &choices,
        )?;
        // A label outside the mapping cannot come from our own choice
        // list; refuse to write anything in that case.
        Ok(ForceMode::from_choice_label(&label).unwrap_or(ForceMode::Cancel))
    }

    // ── Steps 4-6: collect, confirm, generate ─────────────────────────────

    fn collect_and_generate(&self, options: &mut InitOptions) -> WizardResult<WizardOutcome> {
        self.reporter
            .info("\nTo create the scaffold, axon wants to ask you some questions:");

        let pkg = self.collect_metadata(options)?;

        if !self.confirm_metadata(&pkg)? {
            self.reporter.info("Aborted!");
            return Ok(WizardOutcome::Aborted);
        }

        options.pkg = Some(pkg);
        self.generate(options)
    }

    /// Step 4: run the schema-driven questionnaire.
    fn collect_metadata(&self, options: &InitOptions) -> WizardResult<Metadata> {
        let templates = self.generator.available_templates();
        let licenses = self.generator.available_licenses();

        let mut schema = base_schema(&licenses, &templates);
        schema.extend(self.generator.extra_schemas(&options.template));

        let prefilled = self.skipped(options, &templates);
        debug!(prefilled = prefilled.len(), "Skip map computed");

        let answers = self.prompter.questionnaire(&schema, &prefilled)?;
        Ok(answers)
    }

    /// Compute the skip map: profile-derived fields plus the template
    /// pre-fill when the resolved template is actually available.
    fn skipped(&self, options: &InitOptions, templates: &[String]) -> Metadata {
        let mut skip = Metadata::new();
        for (profile_key, field) in PROFILE_FIELDS {
            if let Some(value) = self.profile.get(profile_key) {
                if !value.is_empty() {
                    skip.insert(field.to_string(), serde_json::Value::String(value));
                }
            }
        }

        if templates.iter().any(|t| t == &options.template) {
            skip.insert(
                "template".to_string(),
                serde_json::Value::String(options.template.clone()),
            );
        }

        skip
    }

    /// Step 5: display the collected metadata and ask for a go-ahead.
    fn confirm_metadata(&self, pkg: &Metadata) -> WizardResult<bool> {
        let rendered = serde_json::to_string_pretty(pkg)
            .map_err(|e| WizardError::Generation(GenerationError::Serialize(e)))?;
        self.reporter.info(&format!("\n{rendered}\n"));

        let confirmed = self
            .prompter
            .confirm("About to write files. Is this ok?", true)?;
        Ok(confirmed)
    }

    /// Step 6: hand the confirmed metadata to the generation engine.
    fn generate(&self, options: &InitOptions) -> WizardResult<WizardOutcome> {
        // pkg is set by collect_and_generate right before this call.
        let pkg = options.pkg.clone().unwrap_or_default();

        let license = pkg
            .get("license")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let template = pkg
            .get("template")
            .and_then(|v| v.as_str())
            .unwrap_or(&options.template)
            .to_string();

        let request = GenerateRequest {
            pkg,
            overriding: options.force == Some(ForceMode::Overriding),
            cwd: options.cwd.clone(),
            runtime_version: self.runtime.version(),
            license,
            template,
        };

        info!(cwd = %request.cwd.display(), template = %request.template, "Generation started");
        self.generator.generate(request)?;
        info!("Generation completed");

        Ok(WizardOutcome::Generated)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
