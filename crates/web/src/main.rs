// =============================================================================
// Stock Tracker Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logger (ignore if already initialized by wasm_bindgen start)
    let _ = console_log::init_with_level(stock_tracker_web::log_level());

    log::info!("Starting Stock Tracker...");

    if let Err(e) = stock_tracker_web::mount_to_root() {
        log::error!("Failed to mount Stock Tracker: {}", e);
    }
}
