fn main() {
    #[cfg(target_arch = "wasm32")]
    jwt_pizza_frontend::boot();
}
