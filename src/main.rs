// main.rs - Browser entry point
//
// Built for wasm32 with trunk; the native build is a stub so the rest of
// the crate can be compiled and tested on the host.

#[cfg(target_arch = "wasm32")]
fn main() {
    use product_catalog::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("the product_catalog frontend targets wasm32; run it with `trunk serve`");
}
