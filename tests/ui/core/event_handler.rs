use wishmaker::ui::core::EventHandler;

#[tokio::test]
async fn test_event_handler_frame_timing() {
    let event_handler = EventHandler::new();

    // Initially should not need to render (just created)
    assert!(!event_handler.should_render());

    // After waiting, should be ready to render
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
}

#[tokio::test]
async fn test_mark_rendered_resets_timer() {
    let mut event_handler = EventHandler::with_tick_rate(tokio::time::Duration::from_millis(20));
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}

#[test]
fn test_slow_tick_rate_does_not_slow_input() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let _guard = runtime.enter();

    let slow = EventHandler::with_tick_rate(tokio::time::Duration::from_millis(1000));
    assert_eq!(slow.input_wait(), tokio::time::Duration::from_millis(16));

    let fast = EventHandler::with_tick_rate(tokio::time::Duration::from_millis(10));
    assert_eq!(fast.input_wait(), tokio::time::Duration::from_millis(10));
}
