use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outerspace::client::{self, GrpcServiceClient, HttpServiceClient, ServiceClient};
use outerspace::config::{parse_interval, ClientConfig, ServerConfig};
use outerspace::upstream::Upstreams;
use outerspace::{api, grpc};

#[derive(Parser)]
#[command(name = "outerspace")]
#[command(about = "Launch, rocket, trivia and astronomy data over HTTP and gRPC")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP and gRPC servers
    Serve {
        /// HTTP listen address (overrides HTTP_ADDR)
        #[arg(long)]
        http_addr: Option<SocketAddr>,

        /// gRPC listen address (overrides GRPC_ADDR)
        #[arg(long)]
        grpc_addr: Option<SocketAddr>,
    },
    /// Poll a running server and print what it returns
    Client {
        /// Which front end to talk to
        #[arg(short, long, value_enum, default_value_t = Transport::Http)]
        transport: Transport,

        /// Server address (overrides HTTP_SERVER_ADDR or GRPC_SERVER_ADDR)
        #[arg(short, long)]
        server: Option<String>,

        /// Delay between cycles, e.g. 90s or 30m (overrides POLL_INTERVAL)
        #[arg(short, long, value_parser = parse_interval_arg)]
        interval: Option<Duration>,

        /// Run a single cycle and exit
        #[arg(long)]
        once: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Transport {
    Http,
    Grpc,
}

fn parse_interval_arg(raw: &str) -> Result<Duration, String> {
    parse_interval(raw).ok_or_else(|| format!("invalid interval: {}", raw))
}

/// Initialize tracing with output to stderr (client mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "outerspace=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Client mode prints results on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(
        http = %config.http_addr,
        grpc = %config.grpc_addr,
        timeout_secs = config.upstream_timeout.as_secs(),
        "Starting outerspace server"
    );

    let upstreams = Upstreams::from_config(&config)?;
    let http_listener = TcpListener::bind(config.http_addr).await?;
    let grpc_listener = TcpListener::bind(config.grpc_addr).await?;

    tokio::try_join!(
        async {
            api::serve(http_listener, upstreams.clone())
                .await
                .map_err(anyhow::Error::from)
        },
        async {
            grpc::serve(grpc_listener, upstreams.clone())
                .await
                .map_err(anyhow::Error::from)
        },
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Client { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve {
            http_addr,
            grpc_addr,
        }) => {
            let mut config = ServerConfig::from_env();
            if let Some(addr) = http_addr {
                config.http_addr = addr;
            }
            if let Some(addr) = grpc_addr {
                config.grpc_addr = addr;
            }
            serve(config).await?;
        }
        Some(Commands::Client {
            transport,
            server,
            interval,
            once,
        }) => {
            let config = ClientConfig::from_env();
            let interval = interval.unwrap_or(config.poll_interval);

            let client: Box<dyn ServiceClient> = match transport {
                Transport::Http => {
                    let server = server.unwrap_or(config.http_server);
                    println!("Server: {}, Poll interval: {:?}", server, interval);
                    Box::new(HttpServiceClient::new(server)?)
                }
                Transport::Grpc => {
                    let server = server.unwrap_or(config.grpc_server);
                    println!("Server: {}, Poll interval: {:?}", server, interval);
                    Box::new(GrpcServiceClient::connect(server).await?)
                }
            };

            client::poll(client.as_ref(), interval, once).await;
        }
        None => {
            serve(ServerConfig::from_env()).await?;
        }
    }

    Ok(())
}
