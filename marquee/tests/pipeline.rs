// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end pipeline tests: readiness through sizing, looping, and reflow.

use kurbo::Point;
use marquee::{HostMeasurements, Marquee, MarqueeConfig, MarqueeEvent};
use marquee_loop::{ItemMeasure, Repeat};
use marquee_media::{ContainerMeasure, MediaItem};
use marquee_reflow::RebuildCause;

const ITEM_WIDTH: f64 = 400.0;
const ITEM_COUNT: usize = 5;

fn media() -> Vec<MediaItem> {
    vec![
        MediaItem::new("shot-1.png"),
        MediaItem::new("shot-2.webp"),
        MediaItem::new("clip-1.mp4"),
        MediaItem::new("shot-3.jpg"),
        MediaItem::new("clip-2.webm"),
    ]
}

fn config() -> MarqueeConfig {
    MarqueeConfig {
        speed: 1.0, // 100 px/s
        center: false,
        repeat: Repeat::Infinite,
        ..MarqueeConfig::default()
    }
}

struct Host {
    marquee: Marquee,
    now: f64,
    containers: Vec<ContainerMeasure>,
    items: Vec<ItemMeasure>,
}

impl Host {
    fn new() -> Self {
        let media = media();
        let mut marquee = Marquee::new(&media, config(), 0.0);
        for (i, item) in media.iter().enumerate() {
            if item.src.ends_with(".mp4") || item.src.ends_with(".webm") {
                marquee.media_metadata(i, 1920.0, 1080.0);
            } else {
                marquee.media_loaded(i);
            }
        }
        Self {
            marquee,
            now: 0.0,
            containers: vec![ContainerMeasure::rendered(ITEM_WIDTH); ITEM_COUNT],
            items: (0..ITEM_COUNT)
                .map(|i| ItemMeasure::resting(i as f64 * ITEM_WIDTH, ITEM_WIDTH))
                .collect(),
        }
    }

    fn frame(&mut self, dt: f64) {
        self.now += dt;
        let measured = HostMeasurements {
            viewport_width: 1440.0,
            container_width: ITEM_WIDTH * ITEM_COUNT as f64,
            containers: &self.containers,
            items: &self.items,
        };
        self.marquee.frame(self.now, dt, &measured);
    }

    /// Drives frames until the startup (or rebuild) pipeline reaches the
    /// running phase again.
    fn run_until_running(&mut self) {
        for _ in 0..20 {
            if self.marquee.is_running() {
                return;
            }
            self.frame(0.016);
        }
        panic!("pipeline never reached the running phase");
    }
}

#[test]
fn five_item_strip_builds_a_twenty_second_loop() {
    let mut host = Host::new();
    host.run_until_running();

    // 5 items x 400 px at 100 px/s.
    assert!((host.marquee.duration() - 20.0).abs() < 1e-9);
    assert_eq!(host.marquee.current(), 0);
}

#[test]
fn current_follows_the_playhead() {
    let mut host = Host::new();
    host.run_until_running();

    // Item starts pass the reference point every 4 s.
    for _ in 0..40 {
        host.frame(0.1);
    }
    assert_eq!(host.marquee.current(), 1);
}

#[test]
fn rebuild_preserves_progress_and_direction() {
    let mut host = Host::new();
    host.run_until_running();

    for _ in 0..30 {
        host.frame(0.1);
    }
    host.marquee.set_reversed(true);
    assert!(host.marquee.toggle());
    let progress = host.marquee.progress();
    assert!(progress > 0.0, "strip must have advanced before the resize");

    host.marquee.resize_observed(host.now);
    host.frame(0.05); // past the debounce; tears down and re-enters sizing
    assert!(!host.marquee.is_running());
    host.run_until_running();

    assert!((host.marquee.progress() - progress).abs() < 1e-9);
    assert!(host.marquee.is_reversed());
    assert!(host.marquee.is_paused());
    assert!(
        host.marquee
            .take_events()
            .contains(&MarqueeEvent::Rebuilt(RebuildCause::RESIZE)),
        "rebuild must be surfaced to the host"
    );
}

#[test]
fn manual_refresh_rebuilds_without_a_resize() {
    let mut host = Host::new();
    host.run_until_running();

    host.marquee.refresh_marquee(host.now);
    host.frame(0.016);
    assert!(!host.marquee.is_running());
    host.run_until_running();
    assert!(
        host.marquee
            .take_events()
            .contains(&MarqueeEvent::Rebuilt(RebuildCause::MANUAL))
    );
}

#[test]
fn tap_surfaces_a_media_click_at_the_current_index() {
    let mut host = Host::new();
    host.run_until_running();

    host.marquee.pointer_press(Point::new(320.0, 100.0), host.now);
    host.marquee
        .pointer_release(Point::new(321.0, 100.0), host.now + 0.05);
    let events = host.marquee.take_events();
    assert_eq!(events, vec![MarqueeEvent::MediaClicked(0)]);
    assert!(!host.marquee.is_paused(), "a tap must not leave the strip paused");
}

#[test]
fn drag_scrubs_and_a_slow_release_resumes_playback() {
    let mut host = Host::new();
    host.run_until_running();
    let before = host.marquee.progress();

    host.marquee.pointer_press(Point::new(1000.0, 100.0), host.now);
    // Leftward drag advances progress.
    for step in 1..=10 {
        host.marquee.pointer_move(
            Point::new(1000.0 - f64::from(step) * 20.0, 100.0),
            host.now + f64::from(step) * 0.5,
        );
    }
    assert!(host.marquee.progress() > before);
    host.marquee
        .pointer_release(Point::new(800.0, 100.0), host.now + 5.0);

    // The release glides onto a snap label and then resumes the loop.
    for _ in 0..600 {
        host.frame(0.016);
    }
    assert!(!host.marquee.is_paused());
    let labels = [0.0, 0.2, 0.4, 0.6, 0.8];
    let landed = host.marquee.progress();
    assert!(
        labels.iter().any(|l| {
            let mut d = (l - landed).abs();
            if d > 0.5 {
                d = 1.0 - d;
            }
            d < 0.25
        }),
        "progress {landed} should be near some item start"
    );
}
