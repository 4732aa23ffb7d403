// This binary crate is intentionally minimal.
// All initialization logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example init
fn main() {
    println!("seedling-nn: Nguyen-Widrow weight initialization for feed-forward networks.");
    println!("Run `cargo run --example init` to see a layer-seeding demo.");
}
