mod application;
mod presentation;

fn main() {
    if let Err(e) = application::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
