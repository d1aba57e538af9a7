//! Post manager demo
//!
//! Fills a queue with randomly generated posts, then shows the tree as it is
//! switched to a skew heap and re-ordered by engagement.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin post_manager
//!
//! # More posts, another seed, start from a skew heap
//! RUST_LOG=debug cargo run --bin post_manager -- --count 25 --seed 7 --structure skew
//! ```

use clap::Parser;
use log::info;
use post_queue::policy::{self, HeapType};
use post_queue::post::{
    Post, MAX_CON_LEVEL, MAX_INTEREST_LEVEL, MAX_LIKES, MAX_POST_ID, MAX_TIME, MIN_CON_LEVEL,
    MIN_INTEREST_LEVEL, MIN_LIKES, MIN_POST_ID, MIN_TIME,
};
use post_queue::squeue::{SQueue, Structure};
use post_queue::QueueError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(about = "Demonstrates switching a post queue's structure and priority")]
struct Args {
    /// Number of random posts to insert
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Seed shared by the per-field generators
    #[arg(long, default_value_t = 10)]
    seed: u64,

    /// Initial heap structure (skew or leftist)
    #[arg(long, default_value = "leftist")]
    structure: Structure,
}

/// Uniform generator over one field's valid range
struct FieldGen {
    rng: StdRng,
    min: i32,
    max: i32,
}

impl FieldGen {
    fn new(min: i32, max: i32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        }
    }

    fn next(&mut self) -> i32 {
        self.rng.gen_range(self.min..=self.max)
    }
}

/// One independent generator per post attribute
struct PostGen {
    id: FieldGen,
    likes: FieldGen,
    connect_level: FieldGen,
    post_time: FieldGen,
    interest_level: FieldGen,
}

impl PostGen {
    fn new(seed: u64) -> Self {
        Self {
            id: FieldGen::new(MIN_POST_ID, MAX_POST_ID, seed),
            likes: FieldGen::new(MIN_LIKES, MAX_LIKES, seed),
            connect_level: FieldGen::new(MIN_CON_LEVEL, MAX_CON_LEVEL, seed),
            post_time: FieldGen::new(MIN_TIME, MAX_TIME, seed),
            interest_level: FieldGen::new(MIN_INTEREST_LEVEL, MAX_INTEREST_LEVEL, seed),
        }
    }

    fn next(&mut self) -> Post {
        Post::new(
            self.id.next(),
            self.likes.next(),
            self.connect_level.next(),
            self.post_time.next(),
            self.interest_level.next(),
        )
    }
}

fn main() -> Result<(), QueueError> {
    env_logger::init();
    let args = Args::parse();

    let mut posts = PostGen::new(args.seed);
    let mut queue = SQueue::new(policy::recency(), HeapType::MinHeap, args.structure);

    for _ in 0..args.count {
        let post = posts.next();
        if let Err(err) = queue.insert_post(&post) {
            info!("skipping {}: {}", post, err);
        }
    }

    println!(
        "\nDump of the {} heap queue with recency (MinHeap):",
        queue.structure()
    );
    println!("{}", queue.dump());

    let other = match queue.structure() {
        Structure::Skew => Structure::Leftist,
        Structure::Leftist => Structure::Skew,
    };
    queue.set_structure(other)?;
    println!("\nDump of the {} heap queue with recency (MinHeap):", other);
    println!("{}", queue.dump());

    println!("\nPreorder traversal of the nodes in the queue with recency (MinHeap):");
    print!("{}", queue.preorder());

    queue.set_priority_fn(policy::engagement(), HeapType::MaxHeap);
    println!(
        "\nDump of the {} queue with engagement (MaxHeap):",
        queue.structure()
    );
    println!("{}", queue.dump());

    Ok(())
}
