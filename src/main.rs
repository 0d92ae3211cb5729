#[tokio::main]
async fn main() {
    if let Err(err) = mindcheck::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
