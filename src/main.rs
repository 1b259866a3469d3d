use anyhow::Result;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use lcsdiff::areas::comparison::Comparison;
use lcsdiff::artifacts::core::PagerWriter;
use lcsdiff::artifacts::diff::{DiffOptions, DiffSummary, Rendering};
use minus::Pager;
use std::io::BufWriter;
use std::process::ExitCode;

const EXIT_DIFFERENT: u8 = 1;
const EXIT_TROUBLE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "lcsdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line",
    long_about = "This command compares two files line by line using a longest common subsequence \
    table and prints every line prefixed with '  ' (kept), '+ ' (inserted) or '- ' (deleted). \
    Exits with 0 when the inputs are identical, 1 when they differ and 2 on error.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The original file, or '-' for standard input")]
    old: String,
    #[arg(index = 2, help = "The changed file, or '-' for standard input")]
    new: String,
    #[arg(
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "Colorize inserted and deleted lines"
    )]
    color: ColorChoice,
    #[arg(
        long,
        help = "Build the table over the whole inputs, without skipping common head/tail lines"
    )]
    no_trim: bool,
    #[arg(
        long,
        value_name = "N",
        help = "Fail instead of comparing more than N changed lines on either side"
    )]
    max_lines: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) if summary.has_changes() => ExitCode::from(EXIT_DIFFERENT),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lcsdiff: {err:#}");
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}

fn run(cli: &Cli) -> Result<DiffSummary> {
    let stdout_is_terminal = std::io::stdout().is_terminal();
    let colorize = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => stdout_is_terminal,
    };
    colored::control::set_override(colorize);

    let rendering = if colorize {
        Rendering::Colored
    } else {
        Rendering::Plain
    };
    let options = DiffOptions::default()
        .with_trim(!cli.no_trim)
        .with_rendering(rendering);

    if stdout_is_terminal && std::env::var_os("NO_PAGER").is_none() {
        let pager = Pager::new();
        let writer = Box::new(PagerWriter::new(pager.clone()));
        let summary = Comparison::new(&cli.old, &cli.new, writer)?
            .with_options(options)
            .with_max_lines(cli.max_lines)
            .diff()?;
        minus::page_all(pager)?;

        return Ok(summary);
    }

    let stdout = Box::new(BufWriter::new(std::io::stdout()));
    Comparison::new(&cli.old, &cli.new, stdout)?
        .with_options(options)
        .with_max_lines(cli.max_lines)
        .diff()
}
