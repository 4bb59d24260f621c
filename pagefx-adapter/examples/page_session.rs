// Example: a simulated page session driving the composed controller.
//
// A real host would:
// - resolve element handles at startup and pass them in PageOptions
// - forward pointer/scroll/key/click events as they arrive
// - call tick(now_ms) from its frame loop and apply the emitted effects
use pagefx::{Gallery, GalleryItem, Key, Point, ScrollMetrics};
use pagefx_adapter::{ClickTarget, PageController, PageEffect, PageOptions};

fn main() {
    let gallery: Gallery = (0..4)
        .map(|i| GalleryItem {
            image_src: format!("images/work-{i}.jpg"),
            image_alt: format!("Work {i}"),
            title: format!("Project {i}"),
            category: "Design".into(),
        })
        .collect();

    let options = PageOptions::new()
        .with_cursor(1)
        .with_follower(2)
        .with_hero(3)
        .with_nav(4)
        .with_progress_bar(5)
        .with_nav_menu(6);
    let mut page = PageController::new(gallery, options);

    let mut apply = |e: PageEffect| println!("effect: {e:?}");

    page.on_pointer_move(Point::new(400.0, 300.0));
    page.on_scroll(ScrollMetrics::new(250.0, 3000.0, 600.0), 0, &mut apply);

    let mut now = 0u64;
    for _ in 0..4 {
        now += 16;
        page.tick(now, &mut apply);
    }

    // Mobile menu: a nav link click collapses it before the anchor scroll starts.
    page.on_nav_toggle(&mut apply);
    page.on_nav_link_click(&mut apply);

    // Anchor navigation: the click arms a tween, tick drives the ScrollTo frames.
    let target = page.on_anchor_click(900.0, now);
    println!("anchor target: {target}");
    while page.is_scroll_animating() {
        now += 16;
        page.tick(now, &mut apply);
    }

    // Open the lightbox from a gallery trigger, walk it with the keyboard, close on
    // the backdrop.
    page.on_click(ClickTarget::GalleryTrigger(2), &mut apply);
    page.on_key_down(Key::ArrowRight, &mut apply);
    page.on_key_down(Key::ArrowRight, &mut apply); // wraps to 0
    page.on_key_down(Key::ArrowLeft, &mut apply);
    page.on_click(ClickTarget::Backdrop, &mut apply);

    println!(
        "done: open={} index={}",
        page.lightbox().is_open(),
        page.lightbox().current_index()
    );
}
