use std::net::TcpListener;

use glframe_embed::{EmbedConfig, EmbedError, EmbedResolver};
use glframe_host::config::Config;
use glframe_host::serve::{self, AppState};
use tokio::signal;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_banner() {
    eprintln!();
    eprintln!("  \x1b[1;36m╔══════════════════════════════════════════╗\x1b[0m");
    eprintln!("  \x1b[1;36m║\x1b[0m  \x1b[1;96mglframe\x1b[0m v{VERSION:<31}\x1b[1;36m║\x1b[0m");
    eprintln!("  \x1b[1;36m║\x1b[0m  \x1b[2;37mWebGL builds in a themed page shell\x1b[0m     \x1b[1;36m║\x1b[0m");
    eprintln!("  \x1b[1;36m╚══════════════════════════════════════════╝\x1b[0m");
    eprintln!();
}

fn print_help() {
    println!("glframe - WebGL builds in a themed page shell");
    println!();
    println!("USAGE:");
    println!("    glframe [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version");
    println!();
    println!("CONFIG:");
    println!("    ~/.config/glframe/config.toml");
    println!();
    println!("ENVIRONMENT:");
    println!("    GLFRAME_EMBED_URL    Address of the WebGL build to embed");
    println!("                         (overrides [embed] url in the config file)");
    println!();
    println!("EXAMPLES:");
    println!("    glframe                 Serve the shell with config file settings");
    println!("    GLFRAME_EMBED_URL=https://builds.example.com/game/ glframe");
    println!("                            Serve the shell around a specific build");
}

fn print_connection_info(http_port: u16, bind: &str, embed_url: Option<&str>) {
    eprintln!("  \x1b[1;32m[http]\x1b[0m   Serving shell on port \x1b[1;96m{http_port}\x1b[0m");
    match embed_url {
        Some(url) => eprintln!("  \x1b[1;32m[embed]\x1b[0m  Build: {url}"),
        None => {
            eprintln!("  \x1b[1;33m[embed]\x1b[0m  No build configured, page will show its fallback");
        }
    }
    eprintln!();
    eprintln!("  \x1b[1;37m>\x1b[0m Open: \x1b[4;96mhttp://{bind}:{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mPress Ctrl+C to stop\x1b[0m");
    eprintln!();
}

/// Graceful start: Check if port is available
fn check_port_available(bind: &str, port: u16) -> bool {
    TcpListener::bind(format!("{bind}:{port}")).is_ok()
}

/// Graceful start: Find available port starting from default
fn find_available_port(bind: &str, start: u16) -> Option<u16> {
    (start..start + 10).find(|&port| check_port_available(bind, port))
}

/// Advisory startup check: resolve the configured URL the way the page will,
/// against the address the shell is about to be served on. A rejected URL is
/// not fatal; the page shows its fallback instead.
fn startup_embed_check(embed: &EmbedConfig, bind: &str, port: u16) {
    let page_url = format!("http://{bind}:{port}/");
    match EmbedResolver::new(embed.clone()).check(&page_url) {
        Ok(url) => tracing::info!("embedding {url}"),
        Err(EmbedError::Missing) => {
            tracing::warn!("no embed URL configured; the page will show its fallback");
        }
        Err(err) => tracing::warn!("configured embed URL rejected: {err}"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    eprintln!();
    eprintln!("  \x1b[1;33m[bye]\x1b[0m    Graceful shutdown initiated...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Handle --version and --help
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("glframe {VERSION}");
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
    }

    print_banner();

    // === LOAD CONFIGURATION ===
    Config::create_default_if_missing();
    let config = Config::load();
    eprintln!(
        "  \x1b[1;32m[config]\x1b[0m Loaded from {}",
        Config::default_config_path().display()
    );

    // === GRACEFUL START ===
    let http_port = if check_port_available(&config.server.bind, config.server.http_port) {
        config.server.http_port
    } else {
        eprintln!(
            "  \x1b[1;33m[warn]\x1b[0m   Port {} in use, finding alternative...",
            config.server.http_port
        );
        if let Some(p) = find_available_port(&config.server.bind, config.server.http_port + 1) {
            eprintln!("  \x1b[1;32m[check]\x1b[0m  Using HTTP port {p}");
            p
        } else {
            eprintln!(
                "  \x1b[1;31m[error]\x1b[0m  No available HTTP ports in range {}-{}",
                config.server.http_port,
                config.server.http_port + 10
            );
            std::process::exit(1);
        }
    };

    startup_embed_check(&config.embed, &config.server.bind, http_port);
    print_connection_info(http_port, &config.server.bind, config.embed.url.as_deref());

    // === START EMBEDDED HTTP SERVER (axum) ===
    let app = serve::router(AppState {
        embed: config.embed.clone(),
    });

    let http_addr = format!("{}:{http_port}", config.server.bind);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("  \x1b[1;32m[done]\x1b[0m   Shell is down. Later!");
    eprintln!();

    Ok(())
}
