/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

mod cli;

use anyhow::{bail, Context, Result};
use citeline_core::{StyleOptions, CHAR_WIDTH_RATIO};
use citeline_processor::layout::Placement;
use citeline_processor::{io, Canvas, Processor, RenderedBibliography};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use schemars::schema_for;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, Output, RenderArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => render(&args),
        Command::Schema => {
            let schema = schema_for!(StyleOptions);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// JSON report: the rendered bibliography plus its placement on the canvas.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    rendered: &'a RenderedBibliography,
    placement: Placement,
}

fn render(args: &RenderArgs) -> Result<()> {
    let mut options = match &args.config {
        Some(path) => io::load_options(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => StyleOptions::default(),
    };
    args.apply(&mut options);
    debug!(?options, "resolved options");

    let processor = Processor::new(options);
    let rendered = processor
        .process_file(&args.file)
        .with_context(|| format!("failed to process {}", args.file.display()))?;

    info!(
        entries = rendered.entry_count,
        skipped = rendered.skipped,
        "rendered bibliography"
    );
    if rendered.skipped > 0 {
        eprintln!("skipped {} malformed record(s)", rendered.skipped);
    }

    match args.output {
        // A backend document replaces the native lines.
        Output::Text => match &rendered.typeset {
            Some(doc) => print!("{}", doc),
            None => {
                let char_width = f64::from(processor.options.font_size) * CHAR_WIDTH_RATIO;
                for line in &rendered.lines {
                    let pad = if char_width > 0.0 {
                        (f64::from(line.indent) / char_width).round() as usize
                    } else {
                        0
                    };
                    println!("{}{}", " ".repeat(pad), line.text);
                }
            }
        },
        Output::Json => {
            let canvas = Canvas {
                width: args.canvas_width,
                height: args.canvas_height,
            };
            let report = JsonReport {
                rendered: &rendered,
                placement: processor.place(&rendered, canvas),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Output::Latex => match &rendered.typeset {
            Some(doc) => print!("{}", doc),
            None => bail!("LaTeX typesetting failed; run with -v for details"),
        },
    }

    Ok(())
}
