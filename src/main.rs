use std::process::ExitCode;

use clap::Parser;
use figsearch::{fig_search, logging::create_tracing_subscriber, usage_exit_code, FigSearchArgs};
use tracing_subscriber::util::SubscriberInitExt;

/// Parse command line arguments, run the requested search.
fn main() -> ExitCode {
    let args: FigSearchArgs = match FigSearchArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err));
        }
    };
    create_tracing_subscriber(args.verbose, args.quiet).init();
    ExitCode::from(fig_search(&args))
}
