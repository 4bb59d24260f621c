// Example: one-shot reveal groups plus a stat counter driven by a tick loop.
use pagefx::{ObserveOptions, RevealController, RevealEffect, RevealKind};

fn main() {
    let mut reveal = RevealController::new();

    reveal.observe([1, 2], RevealKind::Visible, ObserveOptions::reveal(), |_| {});
    reveal.observe(
        [10, 11, 12],
        RevealKind::Stagger,
        ObserveOptions::stagger(),
        |e| println!("prepare: {e:?}"),
    );
    reveal.observe([20], RevealKind::Counter, ObserveOptions::counter(), |_| {});

    // The host's intersection subscription fires as elements scroll into view. The
    // counter reads the element text through the closure at trigger time.
    reveal.notify_intersection(1, true, 0, |_| None, |e| println!("fire: {e:?}"));
    reveal.notify_intersection(11, true, 0, |_| None, |e| println!("fire: {e:?}"));
    reveal.notify_intersection(20, true, 0, |_| Some("100+".into()), |e| {
        println!("fire: {e:?}")
    });

    // Duplicate deliveries after the one-shot are ignored.
    reveal.notify_intersection(1, true, 16, |_| None, |_| println!("never printed"));

    let mut now = 0u64;
    while reveal.has_active_counters() {
        now += 16;
        reveal.tick(now, |e| {
            if let RevealEffect::SetText { text, .. } = e {
                if now % 160 < 16 {
                    println!("t={now} text={text:?}");
                }
            }
        });
    }
    println!("pending={} observed={}", reveal.pending_len(), reveal.observed_len());
}
