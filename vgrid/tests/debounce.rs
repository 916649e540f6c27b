use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::yield_now;
use tokio::time::advance;

use vgrid::debounce::Debouncer;

fn recording() -> (Arc<Mutex<Vec<String>>>, Debouncer<String>) {
    let calls: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debouncer = Debouncer::new(Duration::from_millis(50), move |text: String| {
        sink.lock().unwrap().push(text);
    });
    (calls, debouncer)
}

// Lets spawned timer tasks register and run between clock steps.
async fn settle() {
    for _ in 0..10 {
        yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_burst_fires_once_with_last_args() {
    let (calls, mut debouncer) = recording();

    debouncer.schedule("a".into());
    settle().await;
    advance(Duration::from_millis(10)).await;
    debouncer.schedule("b".into());
    settle().await;
    advance(Duration::from_millis(10)).await;
    debouncer.schedule("c".into());
    settle().await;

    advance(Duration::from_millis(49)).await;
    settle().await;
    assert!(calls.lock().unwrap().is_empty());

    advance(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(*calls.lock().unwrap(), vec!["c".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_spaced_calls_each_fire() {
    let (calls, mut debouncer) = recording();

    debouncer.schedule("a".into());
    settle().await;
    advance(Duration::from_millis(60)).await;
    settle().await;

    debouncer.schedule("b".into());
    settle().await;
    advance(Duration::from_millis(60)).await;
    settle().await;

    assert_eq!(*calls.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_pending_flag_tracks_timer() {
    let (_calls, mut debouncer) = recording();
    assert!(!debouncer.has_pending());

    debouncer.schedule("a".into());
    assert!(debouncer.has_pending());
    settle().await;

    advance(Duration::from_millis(51)).await;
    settle().await;
    assert!(!debouncer.has_pending());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_prevents_invocation() {
    let (calls, mut debouncer) = recording();

    debouncer.schedule("doomed".into());
    settle().await;
    debouncer.teardown();

    advance(Duration::from_millis(200)).await;
    settle().await;
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_timer() {
    let (calls, mut debouncer) = recording();

    debouncer.schedule("doomed".into());
    settle().await;
    drop(debouncer);

    advance(Duration::from_millis(200)).await;
    settle().await;
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_set_delay_applies_to_next_timer() {
    let (calls, mut debouncer) = recording();
    debouncer.set_delay(Duration::from_millis(10));
    assert_eq!(debouncer.delay(), Duration::from_millis(10));

    debouncer.schedule("quick".into());
    settle().await;
    advance(Duration::from_millis(11)).await;
    settle().await;
    assert_eq!(*calls.lock().unwrap(), vec!["quick".to_string()]);
}
