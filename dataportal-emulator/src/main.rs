use clap::Parser;
use dataportal_emulator::{Emulator, EmulatorConfig};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "dataportal-emulator")]
struct Args {
    /// Port to listen on; 0 picks an ephemeral port.
    #[arg(long, default_value_t = 0)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let address: SocketAddr = ([127, 0, 0, 1], args.port).into();
    let config = EmulatorConfig::new(address);

    let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();

    // Print "Listening on <addr>" once the emulator signals it is bound.
    tokio::spawn(async move {
        if let Ok(addr) = ready_rx.await {
            println!("Listening on {}", addr);
        }
    });

    Emulator::new(config).run(ready_tx).await?;
    Ok(())
}
