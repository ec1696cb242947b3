use anyhow::Context;
use clap::Args;
use colored::Colorize;
use sketchpad_editor::EditorSession;
use sketchpad_evaluator::{compile, CompileError};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input component source file
    pub input: PathBuf,
}

pub fn check(args: CheckArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    match compile(&source) {
        Ok(render_fn) => {
            println!(
                "{} {} exports {}",
                "OK".green().bold(),
                filename,
                render_fn.name()
            );
            Ok(())
        }
        Err(err) => {
            if let CompileError::Syntax(parse_err) = &err {
                eprintln!(
                    "{}",
                    sketchpad_parser::format_error(&source, &filename, parse_err)
                );
            }
            Err(err.into())
        }
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input component source file
    pub input: PathBuf,

    /// Emit the rendered tree as JSON instead of serialized source
    #[arg(long)]
    pub json: bool,
}

pub fn render(args: RenderArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;

    let mut session = EditorSession::new();
    session
        .compile_and_render(&source)
        .context("Compilation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.mount())?);
    } else {
        println!("{}", session.save()?);
    }

    Ok(())
}
