//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatsift::cli::Args;
use chatsift::config::ExportConfig;
use chatsift::format::ExportFormat;
use chatsift::session::SourceOutcome;
use chatsift::{ChatsiftError, Session};

fn main() {
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    // Validate criteria before touching any file
    let filter_config = args.filter_config()?;

    let mut session = Session::new();
    let report = session.load_batch(&args.inputs, args.format_in.map(Into::into));

    for outcome in &report.outcomes {
        match outcome {
            SourceOutcome::Loaded { source_id, records } => {
                println!("Loaded {} ({} messages)", source_id, records);
            }
            SourceOutcome::Failed { source_id, error } => {
                eprintln!("Failed to load {}: {}", source_id, error);
            }
        }
    }
    if report.all_failed() {
        return Err(ChatsiftError::EmptyCorpus);
    }

    let scope = filter_config.source_scope.as_deref();
    session.check_scope(scope)?;

    if args.senders {
        println!();
        println!("Senders:");
        for sender in session.available_senders(scope) {
            println!("  {}", sender);
        }
    }

    if args.ids {
        println!();
        println!("Message ids:");
        let ids: Vec<String> = session
            .available_ids(scope)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  {}", ids.join(", "));
    }

    if filter_config.has_criteria() {
        match session.apply_filters(filter_config) {
            Ok(result) => {
                println!();
                println!("Sender matches:   {}", result.sender_matches.len());
                println!("Reply matches:    {}", result.reply_matches.len());
                println!("Keyword matches:  {}", result.keyword_matches.len());
                println!("Total:            {}", result.total());
            }
            Err(e) if e.is_precondition() => eprintln!("Nothing to filter: {}", e),
            Err(e) => return Err(e),
        }
    }

    if args.stats {
        match session.stats() {
            Ok(stats) => {
                println!();
                print!("{}", stats);
            }
            Err(e) => eprintln!("No statistics: {}", e),
        }
    }

    if let Some(output) = &args.output {
        let format = args
            .format
            .map(ExportFormat::from)
            .or_else(|| ExportFormat::from_path(output))
            .unwrap_or_default();
        session.export(output, format, &ExportConfig::new())?;
        println!();
        println!("Results saved to {} ({})", output, format);
    }

    Ok(())
}
