fn main() {
    if let Err(e) = env_logger::try_init() {
        eprintln!("Warning: logger unavailable: {}", e);
    }
    roster::app::cli::run();
}
