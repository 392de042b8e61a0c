pub mod handlers;
pub mod session;

use clap::Parser;
use crate::presentation::cli::{Cli, Commands};
use dialoguer::Confirm;
use session::{Session, resolve_config};
use tally_core::error::Result;
use tally_core::sink::{CopyOutcome, TextSink, WriterSink};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.preset.into())?;
    let default_service = config.service_charge.enabled_by_default;
    let mut session = Session::open(cli.data_dir, config, cli.ephemeral)?;
    debug!(key = session.store.key(), ephemeral = cli.ephemeral, "session opened");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Menu => handlers::handle_menu(&session, &mut out),
        Commands::Add { item, count } => {
            handlers::handle_adjust(&mut session, &item, count as i64, &mut out)
        }
        Commands::Remove { item, count } => {
            handlers::handle_adjust(&mut session, &item, -(count as i64), &mut out)
        }
        Commands::Adjust { item, delta } => {
            handlers::handle_adjust(&mut session, &item, delta, &mut out)
        }
        Commands::Show { service } => {
            handlers::handle_show(&session, service.resolve(default_service), &mut out)
        }
        Commands::Receipt { service, out: path } => {
            let mut sink: Box<dyn TextSink + '_> = match path {
                Some(p) => Box::new(handlers::FileSink::new(p)),
                None => Box::new(WriterSink::new(&mut out)),
            };
            let outcome =
                handlers::handle_receipt(&session, service.resolve(default_service), sink.as_mut());
            match outcome {
                CopyOutcome::Copied => eprintln!("receipt: copied"),
                CopyOutcome::Failed => eprintln!("receipt: copy failed"),
            }
            Ok(())
        }
        Commands::Reset { yes } => {
            let confirm = || {
                Confirm::new()
                    .with_prompt("Reset all counts?")
                    .default(false)
                    .interact()
                    .unwrap_or(false)
            };
            handlers::handle_reset(&mut session, yes, confirm, &mut out).map(|_| ())
        }
    }
}
