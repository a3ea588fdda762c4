pub fn version() {
    println!("knetctl version {}", env!("CARGO_PKG_VERSION"));
}
