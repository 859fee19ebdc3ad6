use clap::Parser;

mod cli;

/// Wrapper commands over the user table, upload bucket and secret store
#[derive(Parser, Debug)]
#[clap(name = "cloud-cli", version, about)]
struct BaseArgs {
    #[clap(subcommand)]
    command: cli::Command,
}

#[tokio::main]
async fn main() {
    shared::logging::init_logger();
    let base_args = BaseArgs::parse();

    if let Err(e) = cli::run(base_args.command).await {
        log::debug!("Command failed - {e:?}");
        std::process::exit(1);
    }
}
