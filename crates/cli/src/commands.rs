//! Command execution
//!
//! Commands write their report to the given writer and return whether they
//! succeeded, so the binary can pick the exit code.

use crate::cli::{Commands, OutputFormat};
use anyhow::Context;
use colored::Colorize;
use entity_builder_core::{Named, Validatable};
use entity_builder_fields::serialization::{
    save_field_set_to_compact_string, save_field_set_to_string,
};
use entity_builder_fields::{FieldKind, FieldManifest, FieldSetFile, save_field_set};
use std::io::Write;
use std::path::Path;

/// Run a parsed command
pub fn execute(command: &Commands, out: &mut impl Write) -> anyhow::Result<bool> {
    match command {
        Commands::Build {
            manifest,
            output,
            compact,
        } => build(manifest, output.as_deref(), *compact, out),
        Commands::Validate { manifest } => validate(manifest, out),
        Commands::Kinds { format } => kinds(*format, out),
    }
}

fn build(
    manifest_path: &Path,
    output: Option<&Path>,
    compact: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let manifest = FieldManifest::load(manifest_path)
        .with_context(|| format!("loading manifest {}", manifest_path.display()))?;
    let fields = manifest.build()?;
    tracing::debug!(
        manifest = %manifest_path.display(),
        fields = fields.len(),
        "built field set"
    );

    let mut file = FieldSetFile::new(fields);
    if let Some(entity) = &manifest.entity {
        file = file.with_entity(entity);
    }

    match output {
        Some(path) => {
            save_field_set(&file, path)?;
            tracing::debug!(output = %path.display(), "wrote field set");
            writeln!(
                out,
                "{} Wrote {} field definitions to {}",
                "✓".green(),
                file.fields.len(),
                path.display()
            )?;
        }
        None => {
            let json = if compact {
                save_field_set_to_compact_string(&file)?
            } else {
                save_field_set_to_string(&file)?
            };
            writeln!(out, "{}", json)?;
        }
    }

    Ok(true)
}

fn validate(manifest_path: &Path, out: &mut impl Write) -> anyhow::Result<bool> {
    let manifest = FieldManifest::load(manifest_path)
        .with_context(|| format!("loading manifest {}", manifest_path.display()))?;

    let errors = manifest.validation_errors();
    tracing::debug!(
        manifest = %manifest_path.display(),
        errors = errors.len(),
        "validated manifest"
    );
    if errors.is_empty() {
        writeln!(
            out,
            "{} {} is valid ({} fields)",
            "✓".green(),
            manifest_path.display(),
            manifest.fields.len()
        )?;
        for spec in &manifest.fields {
            writeln!(out, "  {:<32} {}", spec.name(), spec.kind().to_string().dimmed())?;
        }
        return Ok(true);
    }

    writeln!(out, "{} {}", "✗".red(), manifest_path.display().to_string().bold())?;
    for error in errors {
        writeln!(out, "  {} {}", "ERROR".red(), error)?;
    }
    Ok(false)
}

fn kinds(format: OutputFormat, out: &mut impl Write) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<20} {:<28} {}",
                "KIND".bold(),
                "STORAGE TYPE".bold(),
                "VIEW DISPLAY".bold()
            )?;
            for kind in FieldKind::all() {
                let view = if kind.has_view_display() { "yes" } else { "no" };
                writeln!(
                    out,
                    "{:<20} {:<28} {}",
                    kind.as_str(),
                    kind.storage_type().as_str(),
                    view
                )?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = FieldKind::all()
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "kind": kind,
                        "storage_type": kind.storage_type(),
                        "view_display": kind.has_view_display(),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
    }
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================
