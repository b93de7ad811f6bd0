use blendcast::ConnectionHandle;
use blendcast::constants::{DEFAULT_PORT, DEFAULT_WS_HOST};
use clap::Parser;
use futures_util::StreamExt;
use indoc::indoc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

#[derive(Parser)]
#[command(version, about = "Blendcast listener - connects to a running reporter and prints each frame", long_about = None)]
struct Args {
    #[arg(long, default_value = DEFAULT_WS_HOST, help = "Reporter host")]
    host: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let server = ConnectionHandle::new(args.host, args.port);
    println!("Connecting to reporter at {}", server.url());

    let (ws_stream, _) = match connect_async(server.url()).await {
        Ok(connected) => {
            println!("✅ Connected successfully!");
            connected
        }
        Err(e) => {
            eprintln!("❌ Failed to connect to reporter: {}", e);
            print!(
                "{}",
                indoc! {"
                    Make sure the reporter is running:
                    cargo run --bin reporter_example
                "}
            );
            return Ok(());
        }
    };

    println!("Listening for parameter frames... (Press Ctrl+C to exit)\n");

    let (_, mut ws_receiver) = ws_stream.split();
    while let Some(message) = ws_receiver.next().await {
        match message {
            Ok(Message::Text(frame)) => println!("{}", frame),
            Ok(Message::Close(_)) => {
                println!("Reporter closed the connection");
                break;
            }
            Ok(_) => {} // Reporter only ever sends text frames
            Err(e) => {
                eprintln!("❌ Connection error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
