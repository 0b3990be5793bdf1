use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use metalex::diagnostic::DefaultReporter;
use std::process::ExitCode;

/// Tokenizes text containing `{{ ... }}` actions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to tokenize.
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    file: Option<String>,

    /// Tokenize this text instead of a file.
    #[arg(long)]
    text: Option<String>,

    /// Label used in error locations.
    #[arg(long)]
    name: Option<String>,

    /// Run the lexer on its own thread.
    #[arg(long)]
    threaded: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match (&args.file, &args.text) {
        (Some(file), _) => match metalex::load(file) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("error: could not read {}: {}", file, err);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(text)) => metalex::source::text(text),
        (None, None) => Args::command()
            .error(ErrorKind::MissingRequiredArgument, "a file or --text is required")
            .exit(),
    };
    let source = match &args.name {
        Some(name) => metalex::source::named(name, &source.content),
        None => source,
    };

    match metalex::run(source, args.threaded, DefaultReporter::new()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: could not start lexer thread: {}", err);
            ExitCode::FAILURE
        }
    }
}
