//! Integration tests for the corner pipeline.
//!
//! These tests exercise the application layer end-to-end:
//! `CornerService` + `CornerTriggerUseCase` + `ShellStateStore` driven through
//! the mock hook source, with recording mocks standing in for SendInput, the
//! registry, and the message box.

use std::sync::Arc;
use std::time::{Duration, Instant};

use taskcorner::application::corner_trigger::CornerTriggerUseCase;
use taskcorner::application::gesture::KeyInjector;
use taskcorner::application::lifecycle::{CornerService, ServiceState};
use taskcorner::application::report::{ErrorKind, ErrorReporter, Notifier};
use taskcorner::application::shell_state::{ShellBackend, ShellStateStore};
use taskcorner::infrastructure::gesture::mock::MockKeyInjector;
use taskcorner::infrastructure::input_hook::mock::{MockHookProbe, MockHookSource};
use taskcorner::infrastructure::notify::mock::RecordingNotifier;
use taskcorner::infrastructure::shell::mock::MockShellBackend;
use taskcorner_core::{
    AutoHideSetting, KeyEvent, KeyStroke, MouseButton, PointerEvent, TriggerState, VK_LWIN, VK_TAB,
};

struct Rig {
    probe: MockHookProbe,
    injector: Arc<MockKeyInjector>,
    backend: Arc<MockShellBackend>,
    notifier: Arc<RecordingNotifier>,
    service: CornerService,
}

fn rig(backend: MockShellBackend, settle_delay: Duration) -> Rig {
    let hooks = MockHookSource::new();
    let probe = hooks.probe();
    let injector = Arc::new(MockKeyInjector::new());
    let backend = Arc::new(backend);
    let notifier = Arc::new(RecordingNotifier::new());
    let reporter = Arc::new(ErrorReporter::new(Arc::clone(&notifier) as Arc<dyn Notifier>));
    let use_case = CornerTriggerUseCase::new(
        Arc::clone(&injector) as Arc<dyn KeyInjector>,
        ShellStateStore::new(Arc::clone(&backend) as Arc<dyn ShellBackend>),
        Arc::clone(&reporter),
        settle_delay,
    );
    let service = CornerService::new(Box::new(hooks), use_case, reporter);
    Rig {
        probe,
        injector,
        backend,
        notifier,
        service,
    }
}

fn trigger_state(rig: &Rig) -> TriggerState {
    rig.service.trigger().state()
}

#[test]
fn test_corner_touch_emits_chord_then_writes_always_on_top() {
    // Arrange
    let mut rig = rig(
        MockShellBackend::with_setting(AutoHideSetting::AutoHide),
        Duration::ZERO,
    );
    rig.service.start(false).expect("start");

    // Act
    rig.probe.emit(PointerEvent::moved(0, 0).into());

    // Assert
    assert_eq!(
        rig.injector.strokes(),
        vec![
            KeyStroke::press(VK_LWIN),
            KeyStroke::press(VK_TAB),
            KeyStroke::release(VK_TAB),
            KeyStroke::release(VK_LWIN),
        ]
    );
    let writes = rig.backend.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0][8], 0x03);
    assert_eq!(trigger_state(&rig), TriggerState::AwaitingRelease);
}

#[test]
fn test_settle_delay_elapses_before_taskbar_is_pinned() {
    let mut rig = rig(
        MockShellBackend::with_setting(AutoHideSetting::AutoHide),
        Duration::from_millis(30),
    );
    rig.service.start(false).unwrap();

    let started = Instant::now();
    rig.probe.emit(PointerEvent::moved(0, 0).into());

    assert!(started.elapsed() >= Duration::from_millis(30));
    assert_eq!(rig.backend.writes().len(), 1);
}

#[test]
fn test_dwelling_at_corner_fires_once_and_release_restores_once() {
    let mut rig = rig(
        MockShellBackend::with_setting(AutoHideSetting::AutoHide),
        Duration::ZERO,
    );
    rig.service.start(false).unwrap();

    for _ in 0..20 {
        rig.probe.emit(PointerEvent::moved(0, 0).into());
    }
    rig.probe
        .emit(PointerEvent::pressed(MouseButton::Right, 0, 0).into());
    rig.probe.emit(KeyEvent { vk_code: 0x41 }.into());

    assert_eq!(rig.injector.strokes().len(), 4);
    assert_eq!(
        rig.backend.notifications(),
        vec![AutoHideSetting::AlwaysOnTop, AutoHideSetting::AutoHide]
    );
    assert_eq!(trigger_state(&rig), TriggerState::Idle);
}

#[test]
fn test_exit_restores_captured_original_after_many_cycles() {
    // Arrange: the user's taskbar was always visible before the run.
    let mut rig = rig(
        MockShellBackend::with_setting(AutoHideSetting::AlwaysOnTop),
        Duration::ZERO,
    );
    let original_record = rig.backend.record();
    rig.service.start(true).unwrap();

    // Act
    for i in 0..5 {
        rig.probe.emit(PointerEvent::moved(40, 40).into());
        rig.probe.emit(PointerEvent::moved(0, 0).into());
        rig.probe
            .emit(PointerEvent::pressed(MouseButton::Left, 300 + i, 200).into());
    }
    rig.service.on_exit_requested();

    // Assert
    assert_eq!(rig.service.state(), ServiceState::Stopped);
    assert_eq!(rig.backend.record(), original_record);
    assert_eq!(
        rig.service.trigger().shell().captured_original(),
        Some(AutoHideSetting::AlwaysOnTop.to_byte())
    );
}

#[test]
fn test_short_record_degrades_to_gesture_only() {
    let mut rig = rig(
        MockShellBackend::with_record(vec![0x30, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xFF, 0xFF]),
        Duration::ZERO,
    );
    rig.service.start(true).unwrap();

    rig.probe.emit(PointerEvent::moved(0, 0).into());
    rig.probe.emit(KeyEvent { vk_code: 0x1B }.into());
    rig.probe.emit(PointerEvent::moved(0, 0).into());
    rig.service.on_exit_requested();

    assert_eq!(rig.injector.strokes().len(), 8);
    assert!(rig.backend.writes().is_empty());
    assert_eq!(rig.notifier.kinds(), vec![ErrorKind::StoreAccess]);
    assert_eq!(trigger_state(&rig), TriggerState::AwaitingRelease);
}

#[test]
fn test_write_failure_mid_run_still_restores_on_exit() {
    let mut rig = rig(
        MockShellBackend::with_setting(AutoHideSetting::AlwaysOnTop),
        Duration::ZERO,
    );
    rig.service.start(true).unwrap();

    rig.backend.fail_writes(true);
    rig.probe.emit(PointerEvent::moved(0, 0).into());
    rig.backend.fail_writes(false);
    rig.service.on_exit_requested();

    assert_eq!(rig.notifier.kinds(), vec![ErrorKind::StoreAccess]);
    assert_eq!(rig.backend.current_setting(), Some(AutoHideSetting::AlwaysOnTop));
}

#[test]
fn test_unfamiliar_flag_byte_is_pinned_and_restored() {
    // Arrange: an Explorer build that stores a flag we never write.
    let mut record = vec![0x30, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xFF, 0xFF, 0x7A];
    record.extend_from_slice(&[0x00; 39]);
    let mut rig = rig(MockShellBackend::with_record(record.clone()), Duration::ZERO);
    rig.service.start(true).unwrap();

    // Act
    rig.probe.emit(PointerEvent::moved(0, 0).into());
    let pinned = rig.backend.current_setting();
    rig.service.on_exit_requested();

    // Assert
    assert_eq!(pinned, Some(AutoHideSetting::AlwaysOnTop));
    assert!(rig.notifier.kinds().is_empty());
    assert_eq!(rig.backend.record(), record);
}
