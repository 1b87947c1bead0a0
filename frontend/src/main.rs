fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    frontend::start();
}
