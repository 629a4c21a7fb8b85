fn main() {
    if let Err(err) = country_merge::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
