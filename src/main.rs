use clap::{ArgAction, Parser};
use sidediff::LineAlignment;
use sidediff::areas::session::Session;
use sidediff::artifacts::core::should_page;
use sidediff::artifacts::diff::lcs::{AlignLimits, DEFAULT_MAX_CELLS};
use sidediff::commands::compare::CompareOptions;
use sidediff::errors::{DiffError, EXIT_IO_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "sidediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Side-by-side character diff of two text files, rendered as HTML",
    long_about = "This command compares two text files line by line. Every pair of lines \
    that differs is aligned character by character (longest common subsequence), and the \
    result is written as an HTML table with deleted characters struck out on the left and \
    inserted characters highlighted on the right.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The old version of the file")]
    old: PathBuf,
    #[arg(index = 2, help = "The new version of the file")]
    new: PathBuf,
    #[arg(index = 3, help = "Where to write the HTML document")]
    output: PathBuf,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = LineAlignment::Positional,
        help = "How lines are paired: positional compares line i with line i, \
        lcs first aligns identical lines (improved pairing, differs from the classic output)"
    )]
    align: LineAlignment,
    #[arg(
        short,
        long,
        help = "Also print a colored side-by-side preview (paged unless NO_PAGER is set)"
    )]
    preview: bool,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_CELLS,
        help = "Largest alignment table (in cells) allowed for a single pair of lines"
    )]
    max_cells: usize,
    #[arg(short, long, action = ArgAction::Count, help = "Log more details to stderr (repeatable)")]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let error = DiffError::Usage(e.render().to_string());
            eprint!("{error}");
            return ExitCode::from(error.exit_code());
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            let code = e
                .downcast_ref::<DiffError>()
                .map_or(EXIT_IO_ERROR, DiffError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd, Box::new(std::io::stdout()));

    let opts = CompareOptions {
        old: cli.old,
        new: cli.new,
        output: cli.output,
        alignment: cli.align,
        limits: AlignLimits::new(cli.max_cells),
        preview: cli.preview,
        page: cli.preview && should_page(),
    };

    session.compare(&opts)?;

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
