//! Benchmarks for the trigger dispatch path.
//!
//! Every global mouse move passes through `CornerTrigger::on_event` on the
//! hook thread, so it has to stay far below the OS hook timeout.
//!
//! Run with:
//!
//! ```bash
//! cargo bench --package taskcorner-core --bench trigger_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taskcorner_core::{CornerTrigger, InputEvent, KeyEvent, PointerEvent, TaskbarRecord};

fn bench_trigger_move_off_corner(c: &mut Criterion) {
    let mut trigger = CornerTrigger::new();
    let event: InputEvent = PointerEvent::moved(812, 433).into();
    c.bench_function("trigger_move_off_corner", |b| {
        b.iter(|| trigger.on_event(black_box(&event)))
    });
}

fn bench_trigger_fire_and_release_cycle(c: &mut Criterion) {
    let mut trigger = CornerTrigger::new();
    let corner: InputEvent = PointerEvent::moved(0, 0).into();
    let key: InputEvent = KeyEvent { vk_code: 0x1B }.into();
    c.bench_function("trigger_fire_and_release_cycle", |b| {
        b.iter(|| {
            trigger.on_event(black_box(&corner));
            trigger.on_event(black_box(&key))
        })
    });
}

fn bench_record_parse_and_patch(c: &mut Criterion) {
    let mut bytes = vec![0u8; 48];
    bytes[8] = 0x03;
    c.bench_function("taskbar_record_parse_and_patch", |b| {
        b.iter(|| {
            let mut record = TaskbarRecord::parse(black_box(bytes.clone())).unwrap();
            record.set_auto_hide(taskcorner_core::AutoHideSetting::AutoHide);
            record.into_bytes()
        })
    });
}

criterion_group!(
    benches,
    bench_trigger_move_off_corner,
    bench_trigger_fire_and_release_cycle,
    bench_record_parse_and_patch
);
criterion_main!(benches);
