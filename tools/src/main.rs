//! c360: terminal front end and UI-host bridge for the Customer 360 lookup.
//!
//! Usage:
//!   c360 --ids "CUST0000001, CUST0000002" [--select CUST0000002] [--tab accounts|all] [--json]
//!   c360 --ipc-mode
//!   c360 --serve [--port 2114]
//!
//! Common flags: --config c360.json, --api-url http://localhost:8080

mod render;

use anyhow::Result;
use c360_core::{
    client::{HttpTransport, ProfileFetcher, ProfileTransport},
    command::SessionCommand,
    config::DashboardConfig,
    session::ProfileSession,
};
use render::{render_state, TabSelection};
use std::env;
use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpListener;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = has_flag(&args, "--ipc-mode");
    let serve_mode = has_flag(&args, "--serve");
    let config = build_config(&args)?;

    let fetcher = ProfileFetcher::new(HttpTransport::new(&config.api)?);
    let mut session = ProfileSession::new();

    if ipc_mode {
        let stdin = io::stdin();
        run_command_loop(&mut session, &fetcher, stdin.lock(), io::stdout())?;
    } else if serve_mode {
        serve(&mut session, &fetcher, &config)?;
    } else {
        run_once(&mut session, &fetcher, &args)?;
    }

    Ok(())
}

fn build_config(args: &[String]) -> Result<DashboardConfig> {
    let config = match flag_value(args, "--config") {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(url) = flag_value(args, "--api-url") {
        config.api.base_url = url.to_string();
    }
    if let Some(port) = flag_value(args, "--port") {
        config.ui.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --port '{port}': {e}"))?;
    }
    Ok(config)
}

fn run_once<T: ProfileTransport>(
    session: &mut ProfileSession,
    fetcher: &ProfileFetcher<T>,
    args: &[String],
) -> Result<()> {
    let Some(ids) = flag_value(args, "--ids") else {
        print_usage();
        return Ok(());
    };
    let tabs = match flag_value(args, "--tab") {
        Some(raw) => TabSelection::parse(raw)
            .ok_or_else(|| anyhow::anyhow!("Unknown tab '{raw}'"))?,
        None => TabSelection::All,
    };

    session.search(fetcher, ids);
    if let Some(customer_id) = flag_value(args, "--select") {
        if !session.set_selection(customer_id) {
            eprintln!("Customer {customer_id} is not in the results; showing the first match.");
        }
    }

    let state = session.state();
    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_state(&state, tabs));
    }

    if state.error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

/// Line-delimited JSON: one command in, one session snapshot out.
fn run_command_loop<T, R, W>(
    session: &mut ProfileSession,
    fetcher: &ProfileFetcher<T>,
    mut reader: R,
    mut writer: W,
) -> Result<()>
where
    T: ProfileTransport,
    R: BufRead,
    W: Write,
{
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: SessionCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(writer, "{}", err_json)?;
                writer.flush()?;
                continue;
            }
        };

        if cmd == SessionCommand::Quit {
            break;
        }
        session.apply(&cmd, fetcher);
        writeln!(writer, "{}", serde_json::to_string(&session.state())?)?;
        writer.flush()?;
    }
    Ok(())
}

/// One UI host connection at a time; the session outlives connections.
fn serve<T: ProfileTransport>(
    session: &mut ProfileSession,
    fetcher: &ProfileFetcher<T>,
    config: &DashboardConfig,
) -> Result<()> {
    let addr = config.ui.bind_addr();
    let listener = TcpListener::bind(&addr)
        .map_err(|e| anyhow::anyhow!("Cannot listen on {addr}: {e}"))?;
    println!("Customer 360 command loop");
    println!("  listening: {addr}");
    println!("  api:       {}", config.api.customers_endpoint());

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(s) => s,
            Err(e) => {
                log::warn!("accept failed: {e}");
                continue;
            }
        };
        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".into());
        log::info!("ui host connected from {peer}");

        let reader = BufReader::new(stream.try_clone()?);
        if let Err(e) = run_command_loop(session, fetcher, reader, stream) {
            log::warn!("connection from {peer} ended with error: {e}");
        }
        log::info!("ui host {peer} disconnected");
    }
    Ok(())
}

fn print_usage() {
    println!("Customer 360 profile lookup");
    println!("  c360 --ids \"CUST0000001, CUST0000002\" [--select ID] [--tab NAME|all] [--json]");
    println!("  c360 --ipc-mode");
    println!("  c360 --serve [--port PORT]");
    println!();
    println!("  --config PATH    JSON config file");
    println!("  --api-url URL    lookup service base URL");
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
