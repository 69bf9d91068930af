//! Frame loop driving a particle field on a canvas.

use folio_core::{FrameRequest, FrameScheduler};
use thiserror::Error;

use crate::canvas::{Canvas2d, Surface};
use crate::particle::ParticleField;

/// Errors raised when starting an animator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimatorError {
    #[error("drawing context unavailable")]
    ContextUnavailable,
}

/// Animates a [`ParticleField`] on a canvas, one step per granted frame.
///
/// The animator holds at most one outstanding frame request. Each granted
/// frame draws and requests the next; [`FieldAnimator::stop`] cancels the
/// outstanding request, after which wakeups are ignored and nothing is drawn.
/// The scheduler is not owned, so callers must `stop` before dropping.
#[derive(Debug)]
pub struct FieldAnimator<C: Canvas2d> {
    field: ParticleField,
    canvas: C,
    /// The single outstanding frame request, if running.
    pending: Option<FrameRequest>,
    /// Frames that produced draw calls.
    frames_drawn: u64,
}

impl<C: Canvas2d> FieldAnimator<C> {
    /// Acquire a drawing context from `surface` and request the first frame.
    ///
    /// When no context is available nothing is scheduled and the field is
    /// dropped; the caller carries on without the animation.
    pub fn start<S, F>(
        surface: &mut S,
        field: ParticleField,
        frames: &mut F,
    ) -> Result<Self, AnimatorError>
    where
        S: Surface<Canvas = C>,
        F: FrameScheduler + ?Sized,
    {
        let canvas = surface
            .context_2d()
            .ok_or(AnimatorError::ContextUnavailable)?;

        let mut animator = Self {
            field,
            canvas,
            pending: None,
            frames_drawn: 0,
        };
        animator.schedule(frames);
        tracing::debug!(particles = animator.field.len(), "particle field started");
        Ok(animator)
    }

    /// Handle a granted frame. Returns true if the frame was drawn.
    ///
    /// Requests this animator does not own (stale or cancelled) are ignored.
    pub fn on_frame<F>(&mut self, request: FrameRequest, frames: &mut F) -> bool
    where
        F: FrameScheduler + ?Sized,
    {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;

        let drawn = self.draw();
        self.schedule(frames);
        drawn
    }

    /// Cancel the outstanding frame request. Safe to call repeatedly.
    pub fn stop<F>(&mut self, frames: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if let Some(request) = self.pending.take() {
            frames.cancel_frame(request);
            tracing::debug!(frames = self.frames_drawn, "particle field stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Request the next frame, replacing any outstanding request.
    fn schedule<F>(&mut self, frames: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if let Some(previous) = self.pending.take() {
            frames.cancel_frame(previous);
        }
        self.pending = Some(frames.request_frame());
    }

    /// Step the field and draw it. Returns false when the container has no
    /// area yet, in which case no drawing operation is issued.
    fn draw(&mut self) -> bool {
        let density = self.canvas.pixel_density();
        let target = self.canvas.client_size().scaled(density);
        if self.canvas.buffer_size() != target {
            self.canvas.set_buffer_size(target);
        }

        self.field.step();

        if target.is_empty() {
            return false;
        }

        self.canvas.clear();
        let (w, h) = (target.width as f32, target.height as f32);
        let opacity = self.field.opacity();
        for p in self.field.particles() {
            self.canvas
                .fill_circle(p.x * w, p.y * h, p.radius * density.x, p.color, opacity);
        }
        self.frames_drawn += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{HostScheduler, PixelDensity, Rgb, Size, Wakeup};
    use std::time::Duration;

    use crate::particle::FieldSettings;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Resize(Size),
        Clear,
        Circle { radius: f32, alpha: f32 },
    }

    /// Canvas that records every call.
    #[derive(Debug, Default)]
    struct RecordingCanvas {
        client: Size,
        buffer: Size,
        ops: Vec<Op>,
    }

    impl RecordingCanvas {
        fn draw_calls(&self) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::Clear | Op::Circle { .. }))
                .count()
        }
    }

    impl Canvas2d for RecordingCanvas {
        fn client_size(&self) -> Size {
            self.client
        }

        fn pixel_density(&self) -> PixelDensity {
            PixelDensity::new(2.0, 2.0)
        }

        fn buffer_size(&self) -> Size {
            self.buffer
        }

        fn set_buffer_size(&mut self, size: Size) {
            self.buffer = size;
            self.ops.push(Op::Resize(size));
        }

        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn fill_circle(&mut self, _cx: f32, _cy: f32, radius: f32, _color: Rgb, alpha: f32) {
            self.ops.push(Op::Circle { radius, alpha });
        }
    }

    struct RecordingSurface {
        available: bool,
        client: Size,
    }

    impl Surface for RecordingSurface {
        type Canvas = RecordingCanvas;

        fn context_2d(&mut self) -> Option<RecordingCanvas> {
            self.available.then(|| RecordingCanvas {
                client: self.client,
                ..RecordingCanvas::default()
            })
        }
    }

    fn field(count: usize) -> ParticleField {
        let settings = FieldSettings {
            count,
            ..FieldSettings::default()
        };
        ParticleField::seeded(&settings, 11)
    }

    fn start(client: Size, host: &mut HostScheduler) -> FieldAnimator<RecordingCanvas> {
        let mut surface = RecordingSurface {
            available: true,
            client,
        };
        FieldAnimator::start(&mut surface, field(5), host).unwrap()
    }

    /// Advance the host and hand every frame to the animator.
    fn pump(animator: &mut FieldAnimator<RecordingCanvas>, host: &mut HostScheduler, now: u64) {
        for wakeup in host.advance_to(now) {
            if let Wakeup::Frame(request) = wakeup {
                animator.on_frame(request, host);
            }
        }
    }

    #[test]
    fn test_missing_context_aborts_start() {
        let mut host = HostScheduler::default();
        let mut surface = RecordingSurface {
            available: false,
            client: Size::new(10, 10),
        };
        let result = FieldAnimator::start(&mut surface, field(5), &mut host);
        assert_eq!(result.unwrap_err(), AnimatorError::ContextUnavailable);
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn test_each_frame_draws_every_particle_and_reschedules() {
        let mut host = HostScheduler::new(Duration::from_millis(10));
        let mut animator = start(Size::new(40, 10), &mut host);
        assert!(animator.is_running());

        pump(&mut animator, &mut host, 0);
        pump(&mut animator, &mut host, 10);
        pump(&mut animator, &mut host, 20);

        let canvas = animator.canvas();
        // One resize, then clear + 5 circles per frame
        assert_eq!(canvas.ops[0], Op::Resize(Size::new(80, 20)));
        assert_eq!(canvas.ops.len(), 1 + 3 * 6);
        assert_eq!(animator.frames_drawn(), 3);
        assert_eq!(host.pending_frames(), 1);

        let radius_ok = canvas.ops.iter().all(|op| match op {
            Op::Circle { radius, alpha } => *radius >= 0.5 && *alpha == 0.8,
            _ => true,
        });
        assert!(radius_ok);
    }

    #[test]
    fn test_buffer_follows_container_resize() {
        let mut host = HostScheduler::new(Duration::from_millis(10));
        let mut animator = start(Size::new(40, 10), &mut host);
        pump(&mut animator, &mut host, 0);
        animator.canvas_mut().client = Size::new(20, 5);
        pump(&mut animator, &mut host, 10);

        let resizes: Vec<_> = animator
            .canvas()
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Resize(_)))
            .cloned()
            .collect();
        assert_eq!(
            resizes,
            vec![Op::Resize(Size::new(80, 20)), Op::Resize(Size::new(40, 10))]
        );
    }

    #[test]
    fn test_zero_size_container_skips_drawing() {
        let mut host = HostScheduler::new(Duration::from_millis(10));
        let mut animator = start(Size::new(0, 0), &mut host);
        pump(&mut animator, &mut host, 0);
        pump(&mut animator, &mut host, 10);

        assert_eq!(animator.canvas().draw_calls(), 0);
        assert_eq!(animator.frames_drawn(), 0);
        // Still waiting for layout
        assert!(animator.is_running());

        animator.canvas_mut().client = Size::new(4, 4);
        pump(&mut animator, &mut host, 20);
        assert_eq!(animator.frames_drawn(), 1);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut host = HostScheduler::new(Duration::from_millis(10));
        let mut animator = start(Size::new(10, 10), &mut host);
        pump(&mut animator, &mut host, 0);
        let before = animator.canvas().ops.len();

        animator.stop(&mut host);
        assert!(!animator.is_running());
        assert_eq!(host.pending_frames(), 0);

        pump(&mut animator, &mut host, 10);
        pump(&mut animator, &mut host, 20);
        assert_eq!(animator.canvas().ops.len(), before);

        // Stopping twice is harmless
        animator.stop(&mut host);
    }

    #[test]
    fn test_foreign_requests_are_ignored() {
        let mut host = HostScheduler::new(Duration::from_millis(10));
        let mut animator = start(Size::new(10, 10), &mut host);
        let foreign = host.request_frame();
        assert!(!animator.on_frame(foreign, &mut host));
        assert_eq!(animator.canvas().draw_calls(), 0);
        assert!(animator.is_running());
    }

    #[test]
    fn test_particle_count_stable_across_frames() {
        let mut host = HostScheduler::new(Duration::from_millis(10));
        let mut animator = start(Size::new(10, 10), &mut host);
        for t in 0..50 {
            pump(&mut animator, &mut host, t * 10);
        }
        assert_eq!(animator.field().len(), 5);
        let circles = animator
            .canvas()
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count();
        assert_eq!(circles, 5 * 50);
    }
}
