use super::*;

fn t0() -> Instant {
    Instant::now()
}

// =============================================================
// Debouncer
// =============================================================

#[test]
fn debouncer_is_idle_until_poked() {
    let mut debouncer = Debouncer::new(API_DEBOUNCE);
    assert!(!debouncer.ready(t0()));
}

#[test]
fn debouncer_fires_after_quiet_period() {
    let start = t0();
    let mut debouncer = Debouncer::new(API_DEBOUNCE);

    debouncer.poke(start);
    assert!(!debouncer.ready(start + Duration::from_millis(299)));
    assert!(debouncer.ready(start + Duration::from_millis(300)));
}

#[test]
fn repoke_postpones_the_fire() {
    let start = t0();
    let mut debouncer = Debouncer::new(API_DEBOUNCE);

    debouncer.poke(start);
    debouncer.poke(start + Duration::from_millis(200));

    assert!(!debouncer.ready(start + Duration::from_millis(300)));
    assert!(debouncer.ready(start + Duration::from_millis(500)));
}

#[test]
fn fire_is_consumed_once() {
    let start = t0();
    let mut debouncer = Debouncer::new(API_DEBOUNCE);

    debouncer.poke(start);
    assert!(debouncer.ready(start + Duration::from_millis(400)));
    assert!(!debouncer.ready(start + Duration::from_millis(500)));
}

#[test]
fn cancel_drops_the_pending_fire() {
    let start = t0();
    let mut debouncer = Debouncer::new(API_DEBOUNCE);

    debouncer.poke(start);
    debouncer.cancel();
    assert!(!debouncer.ready(start + Duration::from_secs(1)));
}

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_allows_the_first_call() {
    let mut throttle = Throttle::new(SCROLL_THROTTLE);
    assert!(throttle.allow(t0()));
}

#[test]
fn throttle_suppresses_within_interval() {
    let start = t0();
    let mut throttle = Throttle::new(SCROLL_THROTTLE);

    assert!(throttle.allow(start));
    assert!(!throttle.allow(start + Duration::from_millis(50)));
    assert!(!throttle.allow(start + Duration::from_millis(99)));
}

#[test]
fn throttle_reopens_after_interval() {
    let start = t0();
    let mut throttle = Throttle::new(SCROLL_THROTTLE);

    assert!(throttle.allow(start));
    assert!(throttle.allow(start + Duration::from_millis(100)));
}

#[test]
fn suppressed_calls_do_not_extend_the_window() {
    let start = t0();
    let mut throttle = Throttle::new(SCROLL_THROTTLE);

    assert!(throttle.allow(start));
    throttle.allow(start + Duration::from_millis(90));
    assert!(throttle.allow(start + Duration::from_millis(110)));
}
