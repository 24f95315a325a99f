//! Memory profile: RSS measurement at various graph sizes.
//!
//! Builds chain-shaped graphs of 1K, 10K, 100K and 1M nodes and reports the
//! process RSS delta next to the packed-store footprint the engine accounts
//! for itself. Prints a table to stdout, progress to stderr.
//!
//! Run: cargo run --release --bin memory_profile
//! Set `RUST_LOG=dgraph=debug` for engine events.

use anyhow::{Context, Result};
use dgraph::{init_logging, GraphStats, Handle, HandleGraph, MutableHandleGraph, SuccinctGraph};
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

/// Bases per node.
const NODE_LENGTH: usize = 32;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

// ── Graph generator ────────────────────────────────────────────────────

fn build_graph(node_count: usize) -> Result<SuccinctGraph> {
    let bases = b"ACGT";
    let mut graph = SuccinctGraph::new();
    let mut prev: Option<Handle> = None;
    let mut seq = vec![b'A'; NODE_LENGTH];

    for i in 0..node_count {
        for (j, base) in seq.iter_mut().enumerate() {
            *base = bases[(i * 7 + j * 3) % 4];
        }
        let handle = graph.create_handle(&seq)?;
        if let Some(prev) = prev {
            graph.create_edge(prev, handle)?;
            // one bubble-closing edge in ten lands on the reverse strand
            if i % 10 == 0 {
                graph.create_edge(prev.flip(), handle)?;
            }
        }
        prev = Some(handle);
    }
    Ok(graph)
}

// ── RSS measurement ────────────────────────────────────────────────────

fn get_process_rss() -> Result<u64> {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::everything()),
    );
    sys.refresh_all();
    let pid = sysinfo::get_current_pid()
        .map_err(|e| anyhow::anyhow!("failed to get PID: {e}"))?;
    Ok(sys.process(pid).map(|p| p.memory()).unwrap_or(0))
}

fn measure(node_count: usize) -> Result<(u64, GraphStats)> {
    // Let the allocator settle from the previous round
    std::thread::sleep(std::time::Duration::from_millis(100));
    let baseline = get_process_rss()?;

    let graph = build_graph(node_count)
        .with_context(|| format!("building graph of {} nodes", node_count))?;
    let after = get_process_rss()?;
    let stats = graph.stats();

    tracing::debug!(
        "{} nodes: {} edges, {} bp, {} packed bytes",
        graph.node_size(),
        graph.edge_count(),
        graph.total_length(),
        stats.total_heap_bytes
    );
    // Keep the graph alive until after measurement
    drop(graph);

    Ok((after.saturating_sub(baseline), stats))
}

// ── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging("info")?;

    println!("dgraph Memory Profile ({} bp per node)", NODE_LENGTH);
    println!("========================================");
    println!();
    println!(
        "{:<12} {:>12} {:>14} {:>12} {:>10}",
        "Nodes", "RSS (MB)", "Packed (MB)", "Bytes/base", "Edges"
    );
    println!("{:-<64}", "");

    for size in SIZES {
        eprint!("Measuring {}... ", size);

        let (rss, stats) = measure(size)?;
        let rss_mb = rss as f64 / (1024.0 * 1024.0);
        let packed_mb = stats.total_heap_bytes as f64 / (1024.0 * 1024.0);

        println!(
            "{:<12} {:>12.1} {:>14.2} {:>12.3} {:>10}",
            size,
            rss_mb,
            packed_mb,
            stats.bytes_per_base(),
            stats.edge_count
        );
        eprintln!("done");
    }

    println!();
    println!("Note: RSS includes allocator slack and amortized Vec growth.");
    println!("      Packed bytes are what the stores actually hold.");
    Ok(())
}
