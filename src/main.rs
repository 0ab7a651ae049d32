fn main() {
    if let Err(e) = tally::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
