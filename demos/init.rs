use seedling_nn::{scale_factor, Matrix, NguyenWidrow};

fn main() {
    let init = NguyenWidrow::new();

    // Seed the weight matrices of a small 784 -> 128 -> 64 -> 10 MLP.
    for (fan_in, fan_out) in [(784, 128), (128, 64), (64, 10)] {
        let mut weights = Matrix::default();
        init.initialize(&mut weights, fan_in, fan_out)
            .expect("layer dimensions are positive");
        println!(
            "{fan_in:>3} -> {fan_out:<3}  beta = {:.4}  achieved norm = {:.4}",
            scale_factor(fan_in, fan_out),
            weights.frobenius_norm()
        );
    }

    // Snapshot one seeded matrix to inspect the values by hand.
    let mut weights = Matrix::default();
    init.initialize(&mut weights, 4, 2)
        .expect("layer dimensions are positive");
    weights
        .save_json("seeded_weights.json")
        .expect("failed to write seeded_weights.json");
    println!("Wrote a seeded 4x2 matrix to seeded_weights.json");
}
