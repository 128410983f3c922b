fn main() {
    if let Err(e) = taxoscope_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
