//! Subcommand implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use reel_form::{
    CharacterCounter, DraftStore, Form, MemorySubmitter, NullPresenter, SubmitOutcome,
};
use reel_validator::validators::format_phone_input;
use serde::Serialize;

use crate::cli::Cli;
use crate::console::ConsolePresenter;
use crate::loader::{load_data, load_schema};

#[derive(Debug, Serialize)]
struct FieldReport {
    field: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn report(form: &Form) -> Vec<FieldReport> {
    form.field_names()
        .into_iter()
        .filter_map(|name| form.field(&name))
        .map(|field| {
            let error = field.error();
            FieldReport {
                field: field.name().to_owned(),
                valid: error.is_none(),
                code: error.map(|e| e.code.to_string()),
                message: error.map(|e| e.message.to_string()),
            }
        })
        .collect()
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// `reel check`
pub fn check(schema: &Path, data: &Path, json: bool) -> Result<ExitCode> {
    let schema = load_schema(schema)?;
    let values = load_data(data)?;

    let form = schema.build(Arc::new(MemorySubmitter::new()), Arc::new(NullPresenter));
    form.fill(&values).context("apply data to form")?;
    let valid = form.validate_all();
    let fields = report(&form);

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        for field in &fields {
            match &field.message {
                None => println!("ok     {}", field.field),
                Some(message) => println!("error  {}: {message}", field.field),
            }
        }
        let invalid = fields.iter().filter(|f| !f.valid).count();
        if valid {
            println!("{} is valid", form.id());
        } else {
            println!("{} has {invalid} invalid field(s)", form.id());
        }
    }

    Ok(exit_code(valid))
}

/// Options of `reel submit` beyond the input files.
#[derive(Debug, Default)]
pub struct SubmitOptions {
    pub delay: Duration,
    pub reject: Option<String>,
    pub drafts: Option<PathBuf>,
}

/// `reel submit`
pub async fn submit(schema: &Path, data: &Path, options: SubmitOptions) -> Result<ExitCode> {
    let schema = load_schema(schema)?;
    let values = load_data(data)?;

    let mut submitter = match options.reject {
        Some(reason) => MemorySubmitter::rejecting(reason),
        None => MemorySubmitter::new(),
    };
    if !options.delay.is_zero() {
        submitter = submitter.with_delay(options.delay);
    }

    let form = schema.build(Arc::new(submitter), Arc::new(ConsolePresenter));
    form.fill(&values).context("apply data to form")?;

    let outcome = form.submit().await;
    tracing::info!(form = form.id(), ?outcome, "submit finished");

    if let Some(path) = options.drafts {
        let store = DraftStore::new(path);
        match &outcome {
            SubmitOutcome::Accepted => {
                if store.remove(form.id()).context("clear draft")? {
                    println!("draft cleared from {}", store.path().display());
                }
            }
            SubmitOutcome::Failed(_) => {
                store.save(form.id(), &form.snapshot()).context("save draft")?;
                println!("draft saved to {}", store.path().display());
            }
            SubmitOutcome::Invalid | SubmitOutcome::AlreadySubmitting => {}
        }
    }

    if let SubmitOutcome::Failed(err) = &outcome {
        eprintln!("reason: {err}");
    }
    Ok(exit_code(outcome.is_accepted()))
}

/// `reel format-phone`
pub fn format_phone(input: &str) {
    println!("{}", format_phone_input(input));
}

/// `reel counter`
pub fn counter(max: usize, text: &str) {
    let reading = CharacterCounter::new(max).read(text);
    println!("{reading} {}", reading.level);
}

/// `reel completions`
pub fn completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "reel", &mut io::stdout());
}
