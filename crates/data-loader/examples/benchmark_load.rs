use data_loader::{InputHeader, RatingStore, write_synthetic_input};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use std::time::Instant;

fn main() {
    let header = InputHeader {
        n_ratings: 60_000,
        n_users: 500,
        n_items: 200,
    };

    println!("Generating {} synthetic ratings...\n", header.n_ratings);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut input = Vec::new();
    write_synthetic_input(&mut input, &header, &mut rng).expect("Failed to generate input");

    let start = Instant::now();
    let store = RatingStore::load_from_reader(Cursor::new(input)).expect("Failed to load input");
    let elapsed = start.elapsed();

    let (users, items, ratings) = store.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users: {}", users);
    println!("Books: {}", items);
    println!("Ratings: {}", ratings);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
}
