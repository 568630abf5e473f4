#[tokio::main]
async fn main() {
    if let Err(e) = steam_catalog_lib::run().await {
        log::error!("{}", e);
        eprintln!("steam-catalog: {}", e);
        std::process::exit(1);
    }
}
