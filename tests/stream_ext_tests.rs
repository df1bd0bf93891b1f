use futures_util::stream::{self, StreamExt};
use rs2_window::*;

#[tokio::test]
async fn test_stream_matches_iterator_runner() {
    let items = vec![6, 5, 4, 3, 2, 1, 7, 9, 8];
    let config = WindowConfig::pair(3, 5);

    let from_stream: Vec<_> = from_iter(items.clone())
        .window_stats_rs2(config.clone())
        .collect()
        .await;
    let from_iterator: Vec<_> = process_stream_with(items, &config).unwrap().collect();

    assert_eq!(from_iterator, from_stream);
    assert_eq!(5, from_stream.len());
}

#[tokio::test]
async fn test_stream_window_of_three() {
    let pairs: Vec<_> = process_stream_async(stream::iter(vec![1, 2, 3, 4, 5, 6]), &[3])
        .map(|output| output.unwrap().pairs().unwrap()[0])
        .collect()
        .await;
    assert_eq!(vec![(2.0, 3), (3.0, 4), (4.0, 5), (5.0, 6)], pairs);
}

#[tokio::test]
async fn test_stream_unfillable_window_emits_nothing() {
    let outputs: Vec<_> = process_stream_async(from_iter(vec![1, 2, 3, 4, 5, 6]), &[3, 20])
        .collect()
        .await;
    assert!(outputs.is_empty());
}

#[tokio::test]
async fn test_stream_invalid_config_yields_single_error() {
    let outputs: Vec<_> = window_stats(from_iter(vec![1.0, 2.0]), WindowConfig::single(0))
        .collect()
        .await;
    assert_eq!(vec![Err(WindowError::InvalidCapacity { capacity: 0 })], outputs);
}

#[tokio::test]
async fn test_stream_stops_after_error() {
    let config = WindowConfig::single(1).max_strategy(MaxStrategy::MonotonicDeque);
    let outputs: Vec<_> = from_iter(vec![1.0f32, f32::NAN, 3.0])
        .window_stats_rs2(config)
        .collect()
        .await;
    assert_eq!(2, outputs.len());
    assert!(outputs[0].is_ok());
    assert_eq!(Err(WindowError::InvalidValue), outputs[1]);
}

#[tokio::test]
async fn test_stream_every_item_policy() {
    let config = WindowConfig::single(2).emit_policy(EmitPolicy::EveryItem);
    let outputs: Vec<_> = from_iter(vec![4u64, 8, 2])
        .window_stats_rs2(config)
        .map(Result::unwrap)
        .collect()
        .await;
    assert_eq!(None, outputs[0].pairs());
    assert_eq!(Some(vec![(6.0, 8)]), outputs[1].pairs());
    assert_eq!(Some(vec![(5.0, 8)]), outputs[2].pairs());
}
