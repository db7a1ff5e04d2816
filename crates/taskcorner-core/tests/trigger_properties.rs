//! Property-style tests for the corner trigger over longer event sequences.

use taskcorner_core::{
    CornerTrigger, InputEvent, KeyEvent, MouseButton, PointerEvent, TriggerAction, TriggerState,
};

/// Deterministic pseudo-random walk that never touches (0, 0).
fn off_corner_walk(len: usize) -> Vec<InputEvent> {
    let mut seed: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let x = (seed % 3840) as i32 + 1;
            let y = ((seed >> 12) % 2160) as i32;
            match seed % 7 {
                0 => PointerEvent::pressed(MouseButton::Left, x, y).into(),
                1 => KeyEvent { vk_code: seed % 256 }.into(),
                _ => PointerEvent::moved(x, y).into(),
            }
        })
        .collect()
}

fn count(actions: &[TriggerAction], wanted: TriggerAction) -> usize {
    actions.iter().filter(|a| **a == wanted).count()
}

#[test]
fn test_sequences_avoiding_corner_never_fire() {
    let mut trigger = CornerTrigger::new();
    let actions: Vec<_> = off_corner_walk(5_000)
        .iter()
        .map(|e| trigger.on_event(e))
        .collect();

    assert_eq!(count(&actions, TriggerAction::FireGesture), 0);
    assert_eq!(count(&actions, TriggerAction::RestoreShell), 0);
    assert_eq!(trigger.state(), TriggerState::Idle);
}

#[test]
fn test_each_corner_visit_fires_once_and_each_release_restores_once() {
    let mut trigger = CornerTrigger::new();
    let mut actions = Vec::new();

    for cycle in 0..3 {
        // Approach the corner, dwell on it, drift away, then press something.
        for step in (0..5).rev() {
            actions.push(trigger.on_event(&PointerEvent::moved(step, step).into()));
        }
        for _ in 0..4 {
            actions.push(trigger.on_event(&PointerEvent::moved(0, 0).into()));
        }
        actions.push(trigger.on_event(&PointerEvent::moved(200, 150).into()));
        let press: InputEvent = if cycle % 2 == 0 {
            PointerEvent::pressed(MouseButton::Right, 200, 150).into()
        } else {
            KeyEvent { vk_code: 0x0D }.into()
        };
        actions.push(trigger.on_event(&press));
        // A second press after re-arming does nothing.
        actions.push(trigger.on_event(&press));
    }

    assert_eq!(count(&actions, TriggerAction::FireGesture), 3);
    assert_eq!(count(&actions, TriggerAction::RestoreShell), 3);
    assert_eq!(trigger.state(), TriggerState::Idle);
}
