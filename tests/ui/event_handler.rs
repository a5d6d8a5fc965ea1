use speeddial::ui::core::event_handler::EventHandler;
use std::time::Duration;

#[tokio::test]
async fn test_tick_fires_once_per_period() {
    let mut event_handler = EventHandler::with_tick_rate(Duration::from_millis(30));

    // Period just started: no tick yet
    assert!(!event_handler.take_tick());
    assert!(event_handler.until_tick() > Duration::ZERO);
    assert!(event_handler.until_tick() <= Duration::from_millis(30));

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(event_handler.until_tick(), Duration::ZERO);
    assert!(event_handler.take_tick());

    // Taking the tick restarts the period
    assert!(!event_handler.take_tick());
}

#[test]
fn test_zero_tick_rate_is_always_due() {
    let mut event_handler = EventHandler::with_tick_rate(Duration::ZERO);
    assert!(event_handler.take_tick());
    assert!(event_handler.take_tick());
}

#[test]
fn test_custom_tick_rate() {
    let event_handler = EventHandler::with_tick_rate(Duration::from_millis(250));
    assert_eq!(event_handler.tick_rate(), Duration::from_millis(250));
    assert_eq!(EventHandler::default().tick_rate(), Duration::from_millis(100));
}
