use futures_util::stream::StreamExt;
use rs2_window::*;
use tokio::runtime::Runtime;

fn print_run(label: &str, items: Vec<i64>, config: &WindowConfig) {
    println!("\n=== {} {:?} with windows {:?} ===", label, items, config.capacities);
    match process_stream_with(items, config) {
        Ok(runner) => {
            let mut emitted = 0;
            for output in runner {
                match output {
                    Ok(output) => {
                        emitted += 1;
                        println!("  item {}: {:?}", output.index, output.snapshots);
                    }
                    Err(e) => println!("  run failed: {}", e),
                }
            }
            if emitted == 0 {
                println!("  (no output: the largest window never filled)");
            }
        }
        Err(e) => println!("  rejected: {}", e),
    }
}

fn main() {
    let ascending = vec![1, 2, 3, 4, 5, 6];
    let descending = vec![6, 5, 4, 3, 2, 1];

    print_run("Ascending", ascending.clone(), &WindowConfig::pair(3, 20));
    print_run("Descending", descending.clone(), &WindowConfig::pair(3, 20));
    print_run("Ascending", ascending.clone(), &WindowConfig::pair(3, 5));
    print_run("Descending", descending, &WindowConfig::pair(3, 5));

    print_run(
        "Every item",
        ascending.clone(),
        &WindowConfig::pair(3, 5).emit_policy(EmitPolicy::EveryItem),
    );
    print_run("Invalid", ascending, &WindowConfig::single(0));

    println!("\n=== Async stream with a monotonic deque ===");
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let config = WindowConfig::single(3).max_strategy(MaxStrategy::MonotonicDeque);
        let outputs = from_iter(vec![2.5, 9.0, 1.0, 4.0, 8.5, 3.0])
            .window_stats_rs2(config)
            .collect::<Vec<_>>()
            .await;
        for output in outputs {
            println!("  {:?}", output);
        }
    });
}
