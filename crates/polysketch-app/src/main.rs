//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();

    if std::env::args().any(|arg| arg == "--shortcuts") {
        polysketch_app::ShortcutRegistry::print_all();
        return;
    }

    log::info!("Starting PolySketch");
    if let Err(e) = polysketch_app::App::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
