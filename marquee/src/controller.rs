// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marquee instance: pipeline phases and the host control surface.

use kurbo::Point;

use marquee_drag::{DragController, DragUpdate};
use marquee_loop::{ItemMeasure, LoopTimeline, TweenVars};
use marquee_media::{
    ContainerMeasure, ContainerSizer, GateCommand, GateOptions, GateStatus, MediaItem, MediaKind,
    ReadinessGate,
};
use marquee_reflow::{PlaybackSnapshot, RebuildCause, RebuildScheduler, Teardown};

use crate::config::MarqueeConfig;
use crate::events::{MarqueeEvent, MediaCommand};

/// Where one instance is in its strictly sequential startup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for every media element to become ready.
    AwaitingMedia,
    /// Media ready; waiting out the layout settle ticks before measuring.
    Sizing,
    /// Widths pinned; waiting for item measures against the new layout.
    Measuring,
    /// Timeline built and running.
    Running,
}

/// Geometry the host measured this frame.
///
/// Which fields matter depends on the phase: `containers` while sizing,
/// `items` and `container_width` when the loop (re)builds. Supplying all of
/// them every frame is fine.
#[derive(Debug, Clone, Copy)]
pub struct HostMeasurements<'a> {
    /// Width of the viewport, for mobile/desktop height selection.
    pub viewport_width: f64,
    /// Width of the strip's visible container.
    pub container_width: f64,
    /// Per-container measures, in item order.
    pub containers: &'a [ContainerMeasure],
    /// Per-item measures relative to the strip, in item order.
    pub items: &'a [ItemMeasure],
}

/// What the host must apply after a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// Pinned container widths to write, in item order.
    pub widths: Option<Vec<f64>>,
    /// Horizontal offsets to write, as percentages of each item's width.
    pub x_percents: Option<Vec<f64>>,
}

/// One marquee instance.
///
/// Owns the whole pipeline: readiness gate, container sizer, loop timeline,
/// drag controller, and rebuild scheduling. The host renders the items,
/// feeds media events, pointer input, and per-frame measurements, and
/// applies the returned style writes. Instances share nothing; one marquee
/// per media strip.
#[derive(Debug)]
pub struct Marquee {
    config: MarqueeConfig,
    kinds: Vec<MediaKind>,
    gate: ReadinessGate,
    sizer: ContainerSizer,
    timeline: Option<LoopTimeline>,
    drag: DragController,
    scheduler: RebuildScheduler,
    phase: Phase,
    pending_restore: Option<PlaybackSnapshot>,
    rebuild_cause: Option<RebuildCause>,
    user_paused: bool,
    events: Vec<MarqueeEvent>,
    commands: Vec<MediaCommand>,
    teardown: Teardown,
}

impl Marquee {
    /// Creates an instance for the given items, entering the readiness
    /// phase at `now`.
    #[must_use]
    pub fn new(items: &[MediaItem], config: MarqueeConfig, now: f64) -> Self {
        // Unrecognized extensions load like images: a single load/error
        // event, no metadata stage.
        let kinds: Vec<MediaKind> = items
            .iter()
            .map(|item| item.kind().unwrap_or(MediaKind::Image))
            .collect();
        let gate = ReadinessGate::new(
            &kinds,
            now,
            GateOptions {
                play_on_ready: config.play_on_ready,
                ..GateOptions::default()
            },
        );
        Self {
            kinds,
            gate,
            sizer: ContainerSizer::new(config.desktop_height),
            timeline: None,
            drag: DragController::new(config.drag_config()),
            scheduler: RebuildScheduler::default(),
            phase: Phase::AwaitingMedia,
            pending_restore: None,
            rebuild_cause: None,
            user_paused: false,
            events: Vec::new(),
            commands: Vec::new(),
            teardown: Teardown::new(),
            config,
        }
    }

    /// The configuration this instance was created with.
    #[must_use]
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Returns `true` once the timeline is built and running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running && self.timeline.is_some()
    }

    // --- media events, forwarded to the readiness gate ---

    /// The element at `index` reported decoded dimensions.
    pub fn media_metadata(&mut self, index: usize, width: f64, height: f64) {
        self.gate.metadata_loaded(index, width, height);
    }

    /// The element at `index` finished loading.
    pub fn media_loaded(&mut self, index: usize) {
        self.gate.loaded(index);
    }

    /// The element at `index` failed to load; it still occupies layout
    /// space and no longer blocks the group.
    pub fn media_failed(&mut self, index: usize) {
        self.gate.failed(index);
    }

    /// The host observed the element at `index` entering or leaving the
    /// viewport. Only videos react, and only via media commands; the
    /// user-facing pause flag is untouched.
    pub fn item_visibility(&mut self, index: usize, visible: bool) {
        if self.kinds.get(index) == Some(&MediaKind::Video) {
            self.commands.push(if visible {
                MediaCommand::Play(index)
            } else {
                MediaCommand::Pause(index)
            });
        }
    }

    // --- per-frame drive ---

    /// Advances the instance by one host frame.
    ///
    /// `dt` is the time since the previous frame in seconds and `now` the
    /// current timestamp. Returns the style writes the host must apply.
    pub fn frame(&mut self, now: f64, dt: f64, measured: &HostMeasurements<'_>) -> FrameOutput {
        match self.phase {
            Phase::AwaitingMedia => {
                if self.gate.poll(now) == GateStatus::Ready {
                    self.begin_sizing(measured.viewport_width);
                }
                FrameOutput::default()
            }
            Phase::Sizing => {
                self.sizer.frame_tick();
                if self.sizer.ready() {
                    let widths = self.sizer.size(measured.containers);
                    self.phase = Phase::Measuring;
                    FrameOutput {
                        widths: Some(widths),
                        x_percents: None,
                    }
                } else {
                    FrameOutput::default()
                }
            }
            Phase::Measuring => {
                self.build_timeline(measured);
                self.run_frame(now, dt)
            }
            Phase::Running => {
                if let Some(cause) = self.scheduler.poll(now) {
                    self.begin_rebuild(cause, measured.viewport_width);
                    return FrameOutput::default();
                }
                self.run_frame(now, dt)
            }
        }
    }

    fn begin_sizing(&mut self, viewport_width: f64) {
        self.sizer.reset();
        self.sizer
            .set_display_height(self.config.display_height(viewport_width));
        self.phase = Phase::Sizing;
    }

    fn begin_rebuild(&mut self, cause: RebuildCause, viewport_width: f64) {
        self.pending_restore = self.timeline.as_ref().map(PlaybackSnapshot::capture);
        self.rebuild_cause = Some(cause);
        // A rebuild mid-gesture ends the session early.
        self.drag.cancel();
        self.timeline = None;
        self.begin_sizing(viewport_width);
    }

    fn build_timeline(&mut self, measured: &HostMeasurements<'_>) {
        let config = self.config.loop_config(self.user_paused);
        let mut timeline = LoopTimeline::build(measured.items, measured.container_width, config);
        if let Some(timeline) = &mut timeline
            && let Some(snapshot) = self.pending_restore.take()
        {
            snapshot.restore(timeline);
            if self.user_paused {
                timeline.pause();
            }
        }
        self.pending_restore = None;
        self.timeline = timeline;
        self.phase = Phase::Running;
        if let Some(cause) = self.rebuild_cause.take() {
            self.events.push(MarqueeEvent::Rebuilt(cause));
        }
    }

    fn run_frame(&mut self, _now: f64, dt: f64) -> FrameOutput {
        let Some(timeline) = &mut self.timeline else {
            return FrameOutput::default();
        };
        match self.drag.tick(dt) {
            DragUpdate::Throwing(progress) => {
                timeline.scrub_progress(progress);
            }
            DragUpdate::Settled(progress) => {
                timeline.scrub_progress(progress);
                timeline.mark_index_dirty();
                if self.drag.take_resume() && !self.user_paused {
                    timeline.play();
                }
            }
            _ => {
                if !self.drag.is_dragging() {
                    timeline.advance(dt);
                }
            }
        }
        FrameOutput {
            widths: None,
            x_percents: Some(timeline.x_percents_now()),
        }
    }

    // --- pointer input ---

    /// Begins a drag gesture, pausing the loop while the pointer is down.
    pub fn pointer_press(&mut self, point: Point, now: f64) {
        if !self.config.draggable {
            return;
        }
        let Some(timeline) = &mut self.timeline else {
            return;
        };
        let was_playing = !timeline.is_paused() && !self.user_paused;
        timeline.kill_tween();
        timeline.pause();
        let progress = timeline.progress();
        let total_width = timeline.total_width();
        self.drag.press(point, now, progress, total_width, was_playing);
    }

    /// Scrubs the loop to follow the pointer.
    pub fn pointer_move(&mut self, point: Point, now: f64) {
        if let DragUpdate::Scrub(progress) = self.drag.drag(point, now)
            && let Some(timeline) = &mut self.timeline
        {
            timeline.scrub_progress(progress);
        }
    }

    /// Ends the gesture: a tap surfaces [`MarqueeEvent::MediaClicked`], a
    /// real drag settles or throws.
    pub fn pointer_release(&mut self, point: Point, now: f64) {
        let Some(timeline) = &mut self.timeline else {
            return;
        };
        let labels = timeline.label_progresses();
        match self.drag.release(point, now, &labels) {
            DragUpdate::Tap => {
                self.events
                    .push(MarqueeEvent::MediaClicked(timeline.current()));
                if self.drag.take_resume() && !self.user_paused {
                    timeline.play();
                }
            }
            DragUpdate::Throwing(progress) => {
                timeline.scrub_progress(progress);
                timeline.mark_index_dirty();
            }
            DragUpdate::Settled(progress) => {
                timeline.scrub_progress(progress);
                timeline.mark_index_dirty();
                if self.drag.take_resume() && !self.user_paused {
                    timeline.play();
                }
            }
            DragUpdate::Scrub(_) | DragUpdate::Idle => {}
        }
    }

    // --- playback and navigation ---

    /// Flips the user-facing pause state; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.user_paused = !self.user_paused;
        if let Some(timeline) = &mut self.timeline {
            if self.user_paused {
                timeline.pause();
            } else {
                timeline.play();
            }
        }
        self.user_paused
    }

    /// The user-facing pause state. Off-screen video pauses never show here.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.user_paused
    }

    /// Reverses (or restores) the travel direction.
    pub fn set_reversed(&mut self, reversed: bool) {
        if let Some(timeline) = &mut self.timeline {
            timeline.set_reversed(reversed);
        }
    }

    /// Whether the strip is travelling rightward.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.timeline
            .as_ref()
            .is_some_and(LoopTimeline::is_reversed)
    }

    /// The index of the current item, `0` before the loop is built.
    pub fn current(&mut self) -> usize {
        match &mut self.timeline {
            Some(timeline) => timeline.current(),
            None => 0,
        }
    }

    /// Animates one item forward along the shorter rotational path.
    pub fn next(&mut self) {
        if let Some(timeline) = &mut self.timeline {
            timeline.next(TweenVars::default());
        }
    }

    /// Animates one item backward along the shorter rotational path.
    pub fn previous(&mut self) {
        if let Some(timeline) = &mut self.timeline {
            timeline.previous(TweenVars::default());
        }
    }

    /// Normalized playhead position, `0.0` before the loop is built.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.timeline.as_ref().map_or(0.0, LoopTimeline::progress)
    }

    /// Full cycle duration in seconds, `0.0` before the loop is built.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.timeline.as_ref().map_or(0.0, LoopTimeline::duration)
    }

    // --- reflow ---

    /// Notes a viewport resize; the rebuild runs once resizing goes quiet.
    pub fn resize_observed(&mut self, now: f64) {
        self.scheduler.note(RebuildCause::RESIZE, now);
    }

    /// Requests an immediate rebuild (e.g. after a late image load changed
    /// layout).
    pub fn refresh_marquee(&mut self, now: f64) {
        self.scheduler.note(RebuildCause::MANUAL, now);
    }

    // --- host plumbing ---

    /// Drains events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<MarqueeEvent> {
        core::mem::take(&mut self.events)
    }

    /// Drains pending media commands, gate-issued ones first.
    pub fn drain_commands(&mut self) -> Vec<MediaCommand> {
        let mut out: Vec<MediaCommand> = self
            .gate
            .drain_commands()
            .into_iter()
            .map(|GateCommand::PlayMuted(index)| MediaCommand::PlayMuted(index))
            .collect();
        out.append(&mut self.commands);
        out
    }

    /// Registers a disposal handle run when this instance is dropped.
    pub fn on_dispose(&mut self, handle: impl FnOnce() + 'static) {
        self.teardown.defer(handle);
    }
}
