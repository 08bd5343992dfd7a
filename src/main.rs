fn main() {
    if let Err(err) = toolscape::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
