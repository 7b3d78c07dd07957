use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use tracing::debug;

use lingo_diff::DiffReport;
use lingo_flat::{
    flatten, leaf_string, parse_document, to_pretty_json, unflatten_with, validate_document,
    FlatMap,
};
use lingo_placeholder::extract_placeholders;
use lingo_sdk::{LingoConfig, SdkError, TranslationFile, TranslationProject, ViewMode};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format;
    match cli.command {
        Command::Validate(args) => cmd_validate(args),
        Command::Flatten(args) => cmd_flatten(args, &format),
        Command::Unflatten(args) => cmd_unflatten(args, &config),
        Command::Diff(args) => cmd_diff(args, &config, &format),
        Command::Keys(args) => cmd_keys(args, &config, &format),
        Command::Check(args) => cmd_check(args, &config, &format),
        Command::Edit(args) => cmd_edit(args, &config),
        Command::Skeleton(args) => cmd_skeleton(args),
        Command::Placeholders(args) => cmd_placeholders(args, &format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LingoConfig> {
    let config = match path {
        Some(path) => LingoConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => LingoConfig::discover(".")?,
    };
    debug!(?config, "using config");
    Ok(config)
}

fn language_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub(crate) fn load_project(args: &PairArgs, config: &LingoConfig) -> anyhow::Result<TranslationProject> {
    let base = TranslationFile::base(language_of(&args.base), read_file(&args.base)?);
    let target = TranslationFile::target(language_of(&args.target), read_file(&args.target)?);
    Ok(TranslationProject::new(base, target)?.with_config(config))
}

/// Read a file holding an already flat object (`{"a.b": "x"}`).
pub(crate) fn read_flat_file(path: &Path) -> anyhow::Result<FlatMap> {
    let doc = parse_document(read_file(path)?.as_bytes())
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(doc.iter().map(|(k, v)| (k.clone(), leaf_string(v))).collect())
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_validate(args: FileArgs) -> anyhow::Result<()> {
    let content = read_file(&args.file)?;
    validate_document(content.as_bytes())
        .with_context(|| format!("{} is not a valid translation file", args.file.display()))?;
    println!("{} {} is valid", "✓".green().bold(), args.file.display());
    Ok(())
}

fn cmd_flatten(args: FileArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let doc = parse_document(read_file(&args.file)?.as_bytes())
        .with_context(|| format!("parsing {}", args.file.display()))?;
    let flat = flatten(&doc, "");
    match format {
        OutputFormat::Json => print_json(&flat)?,
        OutputFormat::Text => {
            for (key, value) in &flat {
                println!("{} = {}", key.cyan(), value);
            }
        }
    }
    Ok(())
}

fn cmd_unflatten(args: FileArgs, config: &LingoConfig) -> anyhow::Result<()> {
    let flat = read_flat_file(&args.file)?;
    let nested = unflatten_with(&flat, config.conflict_policy)?;
    println!("{}", to_pretty_json(&nested)?);
    Ok(())
}

fn cmd_diff(args: PairArgs, config: &LingoConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let project = load_project(&args, config)?;
    let report = project.report();
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report(&report),
    }
    if config.fail_on_missing && report.difference.has_missing_translations() {
        bail!(
            "{} keys missing in {}",
            report.difference.missing_keys.len(),
            args.target.display()
        );
    }
    Ok(())
}

fn print_report(report: &DiffReport) {
    let diff = &report.difference;
    for key in &diff.missing_keys {
        println!("  {} {}", "missing:".red(), key);
    }
    for key in &diff.extra_keys {
        println!("  {} {}", "extra:".yellow(), key);
    }
    for (key, values) in &diff.different_values {
        println!("  {} {}", "changed:".blue(), key);
        println!("      {} {}", "-".dimmed(), values.base);
        println!("      {} {}", "+".dimmed(), values.target);
    }
    println!(
        "Completion: {} ({}/{} keys translated)",
        format!("{:.1}%", report.completion).bold(),
        report.translated(),
        report.total
    );
}

fn cmd_keys(args: KeysArgs, config: &LingoConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let project = load_project(&args.files, config)?;
    let view = if args.missing { ViewMode::Missing } else { config.default_view };
    let keys = project.editor_keys(view);
    match format {
        OutputFormat::Json => print_json(&keys)?,
        OutputFormat::Text => {
            let base = project.flat_base();
            let target = project.flat_target();
            for key in &keys {
                let translated = target.get(key).map(String::as_str).unwrap_or_default();
                let base_val = base.get(key).map(String::as_str).unwrap_or_default();
                if translated.is_empty() {
                    println!("{} {} {}", key.bold(), base_val.dimmed(), "(untranslated)".red());
                } else {
                    println!("{} {} → {}", key.bold(), base_val.dimmed(), translated);
                }
            }
        }
    }
    Ok(())
}

fn cmd_check(args: PairArgs, config: &LingoConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let project = load_project(&args, config)?;
    let violations = project.placeholder_violations();
    match format {
        OutputFormat::Json => print_json(&violations)?,
        OutputFormat::Text => {
            for v in &violations {
                println!("  {} {} {}", "✗".red().bold(), v.key.bold(), format!("missing {}", v.token).red());
            }
            if violations.is_empty() {
                println!("{} All placeholders preserved", "✓".green().bold());
            }
        }
    }
    if !violations.is_empty() {
        bail!("{} translations dropped placeholders", violations.len());
    }
    Ok(())
}

fn cmd_edit(args: EditArgs, config: &LingoConfig) -> anyhow::Result<()> {
    let mut project = load_project(&args.files, config)?;
    let edits: BTreeMap<String, String> = args.set.into_iter().collect();

    let outcome = match project.apply_edits(&edits) {
        Ok(outcome) => outcome,
        Err(SdkError::FieldRejected { key, base, value, source }) => {
            eprintln!("{} {}", "✗".red().bold(), key.bold());
            eprintln!("  base:  {base}");
            eprintln!("  value: {value}");
            bail!("{source}");
        }
        Err(e) => return Err(e.into()),
    };

    let content = &project.target().content;
    if args.write {
        write_target(&args.files.target, content)?;
        println!(
            "{} Updated {} key(s) in {} ({:.1}% complete)",
            "✓".green().bold(),
            outcome.applied.len(),
            args.files.target.display(),
            outcome.completion
        );
    } else {
        println!("{content}");
    }
    Ok(())
}

fn write_target(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, format!("{content}\n"))
        .with_context(|| format!("writing {}", path.display()))
}

fn cmd_skeleton(args: SkeletonArgs) -> anyhow::Result<()> {
    let base = TranslationFile::base(language_of(&args.base), read_file(&args.base)?);
    let target_lang = args.output.as_deref().map(language_of).unwrap_or_default();
    let project = TranslationProject::from_base(base, target_lang)?;
    let content = &project.target().content;
    match &args.output {
        Some(path) => {
            write_target(path, content)?;
            println!(
                "{} Wrote blank target {} ({} keys to translate)",
                "✓".green().bold(),
                path.display(),
                project.diff().missing_keys.len()
            );
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn cmd_placeholders(args: PlaceholdersArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let tokens = extract_placeholders(&args.text);
    match format {
        OutputFormat::Json => print_json(&tokens)?,
        OutputFormat::Text => {
            for token in &tokens {
                println!("{token}");
            }
        }
    }
    Ok(())
}
