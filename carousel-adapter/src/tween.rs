use carousel::{Ease, Px, Translate};

/// A small tween helper for hosts that animate the strip frame by frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: Px,
    pub to: Px,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: Px, to: Px, start_ms: u64, duration_ms: u64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            ease,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> Px {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = elapsed as f32 / self.duration_ms as f32;
        let eased = self.ease.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased) as Px
    }
}

/// One animation step reported by [`FrameAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFrame {
    pub offset: Px,
    /// The transition just ended; forward [`crate::InputEvent::TransitionEnd`] to the slider.
    pub finished: bool,
}

/// Plays [`Translate`] commands over time, the way a CSS transition would.
///
/// Immediate translates jump without reporting a transition end, matching a zero-duration CSS
/// transition. A new translate during an animation starts from the current sampled offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameAnimator {
    offset: Px,
    tween: Option<Tween>,
}

impl FrameAnimator {
    pub fn new(offset: Px) -> Self {
        Self {
            offset,
            tween: None,
        }
    }

    pub fn offset(&self) -> Px {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn apply(&mut self, translate: &Translate, now_ms: u64) {
        if let Some(tween) = self.tween.take() {
            self.offset = tween.sample(now_ms);
        }
        if translate.is_immediate() {
            self.offset = translate.to;
            return;
        }
        self.tween = Some(Tween::new(
            self.offset,
            translate.to,
            now_ms,
            u64::from(translate.duration_ms),
            translate.ease.unwrap_or_default(),
        ));
    }

    /// Advances the animation. Returns `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<AnimationFrame> {
        let tween = self.tween?;
        self.offset = tween.sample(now_ms);
        let finished = tween.is_done(now_ms);
        if finished {
            self.tween = None;
        }
        Some(AnimationFrame {
            offset: self.offset,
            finished,
        })
    }
}
