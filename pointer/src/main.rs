use clap::{Parser, Subcommand};
use miette::{MietteHandlerOpts, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use pointer::renderer::core::{OffsetUnit, RenderRequest, render_located};
use pointer::utils::glyph::parse_pointer_glyph;
use pointer::utils::input::read_input;
use pointer::utils::loc::Loc;

#[derive(Parser)]
#[command(
    name = "pointer",
    version = "0.1.0",
    about = "Point at an offset in a text file",
    arg_required_else_help = true
)]
struct Cli {
    /// Log at debug level unless POINTER_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Outputs a pointer to the specified offset in the given file
    #[command(visible_aliases = &["pt"])]
    Pointer {
        /// The offset for the pointer to be output
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
        /// Lines of context to show around the line pointed at
        #[arg(short, long, default_value_t = 0)]
        context: usize,
        /// Character to use to point at offset
        #[arg(short, long, default_value = "^", value_parser = parse_pointer_glyph)]
        pointer: char,
        /// Unit the offset is measured in
        #[arg(short, long, value_enum, default_value_t = OffsetUnit::Chars)]
        unit: OffsetUnit,
        /// The file path containing the offset to point at
        file: PathBuf,
    },
}

fn setup_tracing(verbose: bool) -> WorkerGuard {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::time::ChronoLocal;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_env("POINTER_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("pointer=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_timer(ChronoLocal::rfc_3339())
                .with_target(false),
        )
        .init();

    guard
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(false)
                .context_lines(1)
                .build(),
        )
    }))?;

    match cli.cmd {
        Cmd::Pointer {
            offset,
            context,
            pointer,
            unit,
            file,
        } => {
            let text = read_input(&file)?;
            let request = RenderRequest {
                offset,
                context,
                pointer,
                unit,
            };
            let rendered = render_located(&text, &request)?;

            let path = file.display().to_string();
            info!(at = %Loc::at(&path, &text, rendered.position), context, "pointing");
            println!("{}", rendered.output);
        }
    }

    Ok(())
}
