use gameoflife::Generation;

fn main() {
    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;
    const STEPS: usize = 1_000;

    for side in [64, 256, 512] {
        let mut generation = Generation::random(side, side, Some(SEED), FILL_RATE);
        let timer = std::time::Instant::now();
        for _ in 0..STEPS {
            generation = generation.next();
        }
        println!(
            "side={:>4} steps={} time={:?} population={} box={}x{}",
            side,
            STEPS,
            timer.elapsed(),
            generation.population(),
            generation.rows(),
            generation.cols(),
        );
    }
}
