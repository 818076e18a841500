use skyshow::scheduler::{COOLDOWN, LAUNCH_INTERVAL, LAUNCHES_PER_VOLLEY, Scheduler};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn idle_scheduler_never_fires() {
    let mut s = Scheduler::new();
    assert!(!s.is_active());
    assert_eq!(s.poll(ms(60_000)), 0);
}

#[test]
fn fires_every_interval_after_start() {
    let mut s = Scheduler::new();
    s.start(ms(1000));
    assert!(s.is_active());
    assert_eq!(s.poll(ms(1599)), 0);
    assert_eq!(s.poll(ms(1600)), 1);
    assert_eq!(s.poll(ms(2199)), 0);
    assert_eq!(s.poll(ms(2200)), 1);
    assert_eq!(s.launched(), 2);
}

#[test]
fn catches_up_on_a_late_poll() {
    let mut s = Scheduler::new();
    s.start(Duration::ZERO);
    assert_eq!(s.poll(ms(3000)), 5);
}

#[test]
fn pauses_after_a_volley() {
    let mut s = Scheduler::new();
    s.start(Duration::ZERO);

    let volley_end = LAUNCH_INTERVAL * LAUNCHES_PER_VOLLEY;
    let mut fired = 0;
    let mut t = Duration::ZERO;
    while t <= volley_end {
        fired += s.poll(t);
        t += ms(100);
    }
    assert_eq!(fired, 15);
    assert!(s.in_cooldown());

    // Nothing during the cooldown, nor before the first interval after it
    let resume = volley_end + COOLDOWN;
    assert_eq!(s.poll(resume), 0);
    assert!(!s.in_cooldown());
    assert_eq!(s.poll(resume + LAUNCH_INTERVAL - ms(1)), 0);
    assert_eq!(s.poll(resume + LAUNCH_INTERVAL), 1);
    assert_eq!(s.launched(), 16);
}

#[test]
fn stop_during_cooldown_cancels_resume() {
    let mut s = Scheduler::new();
    s.start(Duration::ZERO);
    assert_eq!(s.poll(ms(9000)), 15);
    assert!(s.in_cooldown());

    s.stop();
    assert!(!s.is_active());
    assert_eq!(s.launched(), 0);
    assert_eq!(s.poll(ms(60_000)), 0);
}

#[test]
fn restart_resets_counter() {
    let mut s = Scheduler::new();
    s.start(Duration::ZERO);
    assert_eq!(s.poll(ms(1800)), 3);
    s.toggle(ms(1800));
    assert!(!s.is_active());
    s.toggle(ms(2000));
    assert!(s.is_active());
    assert_eq!(s.launched(), 0);
    assert_eq!(s.poll(ms(2600)), 1);
}

#[test]
fn hiding_suspends_and_showing_resumes_with_fresh_count() {
    let mut s = Scheduler::new();
    s.start(Duration::ZERO);
    assert_eq!(s.poll(ms(2400)), 4);

    s.set_visible(false, ms(2500));
    assert!(s.is_suspended());
    assert!(s.is_active());
    assert_eq!(s.poll(ms(100_000)), 0);

    s.set_visible(true, ms(100_000));
    assert!(!s.is_suspended());
    assert_eq!(s.launched(), 0);
    assert_eq!(s.poll(ms(100_599)), 0);
    assert_eq!(s.poll(ms(100_600)), 1);
    assert_eq!(s.launched(), 1);
}

#[test]
fn hiding_during_cooldown_drops_the_cooldown() {
    let mut s = Scheduler::new();
    s.start(Duration::ZERO);
    assert_eq!(s.poll(ms(9000)), 15);

    s.set_visible(false, ms(9500));
    assert_eq!(s.poll(ms(20_000)), 0);
    s.set_visible(true, ms(20_000));
    assert_eq!(s.poll(ms(20_600)), 1);
}

#[test]
fn visibility_alone_does_not_start_the_show() {
    let mut s = Scheduler::new();
    s.set_visible(false, Duration::ZERO);
    s.set_visible(true, ms(10));
    assert!(!s.is_active());
    assert_eq!(s.poll(ms(10_000)), 0);
}

#[test]
fn starting_while_hidden_waits_for_visibility() {
    let mut s = Scheduler::new();
    s.set_visible(false, Duration::ZERO);
    s.start(Duration::ZERO);
    assert!(s.is_active());
    assert!(s.is_suspended());
    assert_eq!(s.poll(ms(5000)), 0);

    s.set_visible(true, ms(5000));
    assert_eq!(s.poll(ms(5600)), 1);
}
