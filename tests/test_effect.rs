use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use skyshow::color::PALETTE;
use skyshow::config::ShowConfig;
use skyshow::effects::{Effect, fireworks::FireworksEffect};
use skyshow::pattern::PatternType;
use skyshow::surface::Surface;

fn effect() -> FireworksEffect {
    let config = ShowConfig {
        seed: Some(99),
        ..ShowConfig::default()
    };
    FireworksEffect::new(80, 48, &config)
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn number_keys_pick_patterns() {
    let mut fx = effect();
    for (c, pattern) in ['1', '2', '3', '4'].into_iter().zip(PatternType::ALL) {
        fx.handle_event(&key(c));
        assert_eq!(fx.show().selected_pattern(), pattern);
    }
}

#[test]
fn colour_keys_cycle_the_palette() {
    let mut fx = effect();
    assert_eq!(fx.show().selected_color(), PALETTE[0]);
    fx.handle_event(&key('c'));
    assert_eq!(fx.show().selected_color(), PALETTE[1]);
    fx.handle_event(&key('C'));
    fx.handle_event(&key('C'));
    assert_eq!(fx.show().selected_color(), PALETTE[4]);
}

#[test]
fn key_releases_are_ignored() {
    let mut fx = effect();
    let mut release = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    fx.handle_event(&Event::Key(release));
    assert_eq!(fx.show().selected_pattern(), PatternType::Burst);
}

#[test]
fn click_launches_towards_the_cell() {
    let mut fx = effect();
    fx.handle_event(&click(10, 5));

    let rockets = fx.show().rockets();
    assert_eq!(rockets.len(), 1);
    let (x, y) = fx.canvas().cell_to_world(10, 5);
    assert_eq!((rockets[0].target_x, rockets[0].target_y), (x, y));
    assert_eq!(rockets[0].y, fx.canvas().height());

    // Other buttons do nothing
    fx.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    }));
    assert_eq!(fx.show().rockets().len(), 1);
}

#[test]
fn auto_show_toggles_and_follows_focus() {
    let mut fx = effect();
    fx.handle_event(&key('a'));
    assert!(fx.show().scheduler().is_active());

    fx.handle_event(&Event::FocusLost);
    assert!(fx.show().scheduler().is_suspended());
    fx.handle_event(&Event::FocusGained);
    assert!(!fx.show().scheduler().is_suspended());
    assert!(fx.show().scheduler().is_active());

    fx.handle_event(&key(' '));
    assert!(!fx.show().scheduler().is_active());
}

#[test]
fn resize_keeps_entities_in_flight() {
    let mut fx = effect();
    fx.handle_event(&click(10, 5));
    let before = fx.show().rockets()[0].clone();

    fx.handle_event(&Event::Resize(40, 10));
    assert_eq!(fx.canvas().cols(), 40);
    assert_eq!(fx.canvas().rows(), 20);
    assert_eq!(fx.show().height(), fx.canvas().height());
    assert_eq!(fx.show().rockets()[0].y, before.y);
    assert_eq!(fx.show().rockets()[0].target_y, before.target_y);
}

#[test]
fn status_bar_shows_hint_then_state() {
    let mut fx = effect();
    assert!(fx.status_line().unwrap().contains("click to launch"));

    for _ in 0..300 {
        fx.update(1.0 / 60.0);
    }
    let status = fx.status_line().unwrap();
    assert!(status.contains("burst"));
    assert!(status.contains("#FF5A6E"));
    assert!(status.contains("auto show: off"));

    fx.handle_event(&key('h'));
    assert!(!fx.status_visible());
    assert_eq!(fx.status_line(), None);
}

#[test]
fn full_cycle_renders() {
    let mut fx = effect();
    fx.handle_event(&click(40, 5));
    for _ in 0..60 {
        fx.update(1.0 / 60.0);
    }
    assert!(fx.show().rockets().is_empty());
    assert!(!fx.show().fragments().is_empty());

    let mut out = Vec::new();
    fx.render(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\x1b[H"));
    // 23 rows of half-blocks plus the status bar
    assert_eq!(text.matches('▄').count(), 80 * 23);
}
