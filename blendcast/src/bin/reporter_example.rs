use blendcast::constants::{DEFAULT_PORT, DEFAULT_WS_HOST};
use blendcast::{ParamMap, Reporter, WsReporter};
use clap::Parser;
use indoc::indoc;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(version, about = "Blendcast reporter - streams parameter snapshots to one WebSocket client", long_about = None)]
struct Args {
    #[arg(long, default_value = DEFAULT_WS_HOST, help = "Host the WebSocket server listens on")]
    host: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let reporter = WsReporter::new(args.host, args.port);

    println!("Starting reporter at {}", reporter.connection());
    print!(
        "{}",
        indoc! {r#"
            Type a JSON object per line to report it, e.g. {"jawOpen": 0.75}
            Non-float values are filtered out before sending
            Type 'quit' or 'exit' to stop
        "#}
    );
    println!("Clients connect via: {}", reporter.connection().url());

    // Create stdin reader for input loop
    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    // Input loop - parse snapshots from stdin and report them
    loop {
        print!("reporter> ");
        io::stdout().flush().ok();

        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue; // Skip empty lines
                } else if line == "quit" || line == "exit" {
                    println!("Shutting down reporter...");
                    break;
                }
                let snapshot: ParamMap = match serde_json::from_str(&line) {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        eprintln!("❌ Not a JSON object: {}", e);
                        continue;
                    }
                };
                match reporter.send(&snapshot) {
                    Ok(pairs) => {
                        for pair in &pairs {
                            println!("Enqueued: {}", pair);
                        }
                        if pairs.is_empty() {
                            println!("Nothing to enqueue (no float values)");
                        }
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to report snapshot: {}", e);
                        break;
                    }
                }
            }
            Ok(None) | Err(_) => {
                println!("Input stream closed");
                break;
            }
        }
    }

    Ok(())
}
