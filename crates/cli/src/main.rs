//! gitcfg entry point
//!
//! This is the minimal main entry point that delegates to the library.

use clap::Parser;

fn main() {
    // Configure miette for error reporting
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = gitcfg::Cli::parse();

    if let Err(e) = gitcfg_config::logging::init() {
        eprintln!("{:?}", miette::Report::msg(e.to_string()));
        std::process::exit(1);
    }

    // Run and display errors with miette formatting
    if let Err(e) = gitcfg::run(&cli) {
        let miette_error = miette::Report::msg(format!("{e:#}"));
        eprintln!("{miette_error:?}");
        std::process::exit(1);
    }
}
