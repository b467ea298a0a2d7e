#[tokio::main]
async fn main() {
    if let Err(e) = nock_mining_stats::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
