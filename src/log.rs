//! Console logging that works both in the browser and under `cargo test`.

#[cfg(target_arch = "wasm32")]
pub fn log_line(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_line(message: &str) {
    println!("{message}");
}
