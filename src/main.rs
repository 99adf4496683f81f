use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use nowplaying_relay::{
    config::{self, Config},
    error, logging,
    management::NowPlayingResolver,
    server, spotify::SpotifyClient,
    success, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Defaults to `serve`
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the now-playing endpoint
    Serve(ServeOptions),

    /// Resolve once and print the JSON envelope
    Now,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    logging::init_tracing();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let client = match SpotifyClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => error!("Cannot build HTTP client: {}", e),
    };
    let resolver = NowPlayingResolver::new(client);

    match cli.command.unwrap_or(Command::Serve(ServeOptions::default())) {
        Command::Serve(opt) => {
            let address = opt.address.unwrap_or(config.server_address);
            success!("Serving now playing on http://{}", address);
            if let Err(e) = server::start_api_server(&address, resolver).await {
                error!("Server stopped: {}", e);
            }
        }
        Command::Now => println!("{}", resolver.respond().await.to_json_pretty()),
        Command::Completions(_) => {}
    }
}
