fn main() {
    _ = console_log::init_with_level(estates_app::config::log_level());
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    if let Err(err) = estates_app::run() {
        log::error!("Unable to start web application: {err}");
    }
}
