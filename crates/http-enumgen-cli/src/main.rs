//! http-enumgen — entry point.

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use http_enumgen::Source;
use http_enumgen_cli::commands;
use http_enumgen_cli::SourceArgs;

#[derive(Parser)]
#[command(
    name = "http-enumgen",
    about = "Generate C# enums from the HTTP header field and status code reference pages",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Print run reports as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header field enum (Header.cs).
    Headers(GenerateArgs),

    /// Generate the status code enum (StatusCode.cs).
    Status(GenerateArgs),

    /// Generate both enums.
    All(GenerateArgs),

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Page to fetch instead of the built-in reference URL.
    #[arg(long)]
    url: Option<String>,

    /// Read a saved copy of the page instead of fetching it.
    #[arg(short, long, conflicts_with = "url")]
    input: Option<String>,

    /// Output file. Also reads HTTP_ENUMGEN_OUT_DIR.
    #[arg(short, long)]
    output: Option<String>,

    /// HTTP proxy for https requests. Also reads HTTP_ENUMGEN_PROXY.
    #[arg(long)]
    proxy: Option<String>,

    /// Namespace of the generated file.
    #[arg(long)]
    namespace: Option<String>,

    /// Print the document to stdout instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

impl From<GenerateArgs> for SourceArgs {
    fn from(args: GenerateArgs) -> Self {
        SourceArgs {
            url: args.url,
            input: args.input,
            output: args.output,
            proxy: args.proxy,
            namespace: args.namespace,
            dry_run: args.dry_run,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Headers(args) => commands::run(Source::Headers, &args.into())
            .await
            .map(|r| vec![r]),
        Commands::Status(args) => commands::run(Source::StatusCodes, &args.into())
            .await
            .map(|r| vec![r]),
        Commands::All(args) => commands::run_all(&args.into()).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "http-enumgen", &mut std::io::stdout());
            return;
        }
    };

    let printed = result.and_then(|reports| commands::print_reports(&reports, cli.json));
    if let Err(e) = printed {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
