fn main() {
    if let Err(err) = app_profiles_lib::run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
