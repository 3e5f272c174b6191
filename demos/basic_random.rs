//! Walkthrough of the random-eviction cache.
//!
//! Fills a capacity-3 cache past its limit, then shows that overwrites and
//! delete-then-put never evict while new keys into a full cache always do.
//!
//! Run with: cargo run --example basic_random

use randcache::error::CacheError;
use randcache::policy::random::RandomCache;

fn main() -> Result<(), CacheError> {
    println!("=== Random Eviction Cache Example ===\n");

    let mut cache = RandomCache::new(3)?;
    println!("Created random cache: capacity={}\n", cache.capacity());

    for i in 1..=5 {
        cache.put(i, i);
    }
    println!("Put keys 1..=5");
    println!("  contents: {}", cache);
    println!("  replacements: {}", cache.replacement_count());

    println!("\nget(5) = {}", cache.get(&5)?);

    cache.delete(&5)?;
    println!("\nDeleted key 5");
    println!("  contents: {}", cache);
    println!("  free slots: {}", cache.free_slots());

    cache.put(6, 6);
    println!("\nPut key 6 into the freed slot");
    println!("  contents: {}", cache);
    println!("  get(6) = {}", cache.get(&6)?);
    println!(
        "  replacements: {} (unchanged, no eviction needed)",
        cache.replacement_count()
    );

    match cache.get(&5) {
        Err(CacheError::KeyNotFound) => println!("\nget(5) after delete: key not found"),
        other => println!("\nget(5) after delete: {:?}", other),
    }

    println!("\n=== Overwrite Doesn't Evict ===\n");

    let before = cache.replacement_count();
    cache.put(6, 60);
    println!("put(6, 60): get(6) = {}", cache.get(&6)?);
    println!(
        "  replacements before={} after={}",
        before,
        cache.replacement_count()
    );

    println!("\n=== Reads Don't Affect Eviction ===\n");

    let mut cache = RandomCache::new(5)?;
    for i in 1..=5 {
        cache.put(i, i * 10);
    }
    println!("Reading key 1 one thousand times...");
    for _ in 0..1000 {
        let _ = cache.get(&1);
    }
    println!("Inserting keys 6..=10 (5 random evictions)...");
    for i in 6..=10 {
        cache.put(i, i * 10);
    }
    println!("  contains 1? {} (heavily read)", cache.contains(&1));
    println!("  contains 2? {} (never read)", cache.contains(&2));
    println!("  replacements: {}", cache.replacement_count());

    Ok(())
}

// Expected output (exact contents vary due to randomness):
// === Random Eviction Cache Example ===
//
// Created random cache: capacity=3
//
// Put keys 1..=5
//   contents: {[varies], 5: 5}
//   replacements: 2
//
// get(5) = 5
//
// Deleted key 5
//   contents: {[varies]}
//   free slots: 1
//
// Put key 6 into the freed slot
//   contents: {[varies], 6: 6}
//   get(6) = 6
//   replacements: 2 (unchanged, no eviction needed)
//
// get(5) after delete: key not found
//
// === Overwrite Doesn't Evict ===
//
// put(6, 60): get(6) = 60
//   replacements before=2 after=2
//
// === Reads Don't Affect Eviction ===
//
// Reading key 1 one thousand times...
// Inserting keys 6..=10 (5 random evictions)...
//   contains 1? [varies] (heavily read)
//   contains 2? [varies] (never read)
//   replacements: 5
