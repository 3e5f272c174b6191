//! DHAT heap profiler for randcache.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use randcache::builder::CacheBuilder;
use randcache::ds::ReuseOrder;
use randcache::policy::random::RandomCache;
use randcache::traits::MutableCache;

/// Sequential keys: every put past capacity evicts.
fn ordered_inputs<C: MutableCache<u64, u64>>(cache: &mut C, puts: u64) {
    for i in 0..puts {
        cache.insert(i, i);
    }
}

/// Delete-then-put churn: exercises the recycle list. Deletes of keys that
/// were already evicted miss, and the following put evicts instead.
fn delete_churn<C: MutableCache<u64, u64>>(cache: &mut C, start: u64, operations: u64) {
    let lag = cache.capacity() as u64;
    for i in start..start + operations {
        cache.remove(&(i - lag));
        cache.insert(i, i);
    }
}

fn profile(capacity: usize, order: ReuseOrder) {
    println!("Profiling capacity={} reuse_order={:?}...", capacity, order);

    let mut cache: RandomCache<u64, u64> = match CacheBuilder::new(capacity)
        .seed(42)
        .reuse_order(order)
        .build()
    {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("  skipped: {}", err);
            return;
        },
    };

    let puts = (capacity as u64) * 4;
    ordered_inputs(&mut cache, puts);
    delete_churn(&mut cache, puts, capacity as u64);

    println!(
        "  Final size: {}, replacements: {}",
        cache.len(),
        cache.replacement_count()
    );
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("randcache DHAT Heap Profiling");
    println!("=============================\n");

    for capacity in [1_000, 10_000, 100_000] {
        profile(capacity, ReuseOrder::Lifo);
    }
    profile(100_000, ReuseOrder::Fifo);

    println!("\n=============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
