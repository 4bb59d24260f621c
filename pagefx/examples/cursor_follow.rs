// Example: two pointer followers chasing the same target at different smoothing.
use pagefx::{ContinuousAnimator, Point, CURSOR_SMOOTHING, FOLLOWER_SMOOTHING};

fn main() {
    let mut a = ContinuousAnimator::new();
    a.add_follower(1, CURSOR_SMOOTHING);
    a.add_follower(2, FOLLOWER_SMOOTHING);

    // The host would call set_pointer from its mousemove handler and tick from its
    // frame loop; the dot leads, the ring trails.
    a.set_pointer(Point::new(320.0, 240.0));

    for frame in 0..60 {
        a.tick(|f| {
            if frame % 10 == 0 {
                println!(
                    "frame={frame} element={} x={:.1} y={:.1}",
                    f.element, f.position.x, f.position.y
                );
            }
        });
    }

    println!(
        "settled: cursor={:?} follower={:?}",
        a.current_of(1),
        a.current_of(2)
    );
}
