//! Observer registrations and their lifecycle.
//!
//! A section mounts once per render: it hands its container and targets to
//! the [`ObserverRegistry`] and keeps the returned [`RevealHandle`]. Dropping
//! or unmounting the handle removes every observer the mount created.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use tracing::debug;

use super::config::{PlayMode, RevealConfig, TriggerScope, VisualState};
use super::geometry::{Rect, Viewport};
use super::parallax::{ParallaxConfig, ParallaxTracker};

/// A section element that scopes a set of observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: String,
    rect: Option<Rect>,
}

impl Container {
    /// A container that is part of the document.
    pub fn attached(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect: Some(rect),
        }
    }

    /// A container that has not been attached yet.
    pub fn detached(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rect: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn is_attached(&self) -> bool {
        self.rect.is_some()
    }
}

/// An element to reveal. Order of targets is DOM order.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub key: String,
    pub rect: Rect,
}

impl RevealTarget {
    pub fn new(key: impl Into<String>, rect: Rect) -> Self {
        Self {
            key: key.into(),
            rect,
        }
    }
}

/// A discrete change reported by [`ObserverRegistry::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum RevealEvent {
    /// The element's entrance tween started.
    Fired {
        container: String,
        key: String,
        index: usize,
        /// Seconds before the tween visibly starts (`index * stagger`).
        delay: f64,
    },
    /// The element scrolled back above its threshold and is reversing.
    Reversed {
        container: String,
        key: String,
        index: usize,
    },
}

/// Background offset produced by a parallax registration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxUpdate {
    pub container: String,
    pub background: String,
    pub offset_percent: f64,
}

/// Everything one scroll dispatch produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollFrame {
    pub events: Vec<RevealEvent>,
    pub parallax: Vec<ParallaxUpdate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Reveal,
    Parallax,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Hidden,
    /// Tween started at `started_at`; it becomes visible after the stagger delay.
    Playing { started_at: f64 },
    /// Running backwards from raw progress `from`.
    Reversing { started_at: f64, from: f64 },
}

#[derive(Debug)]
struct Observed {
    key: String,
    rect: Rect,
    index: usize,
    phase: Phase,
    fired: bool,
}

#[derive(Debug)]
enum Work {
    Reveal {
        config: RevealConfig,
        observers: Vec<Observed>,
    },
    Parallax {
        background: String,
        tracker: ParallaxTracker,
    },
}

#[derive(Debug)]
struct Registration {
    container: String,
    container_rect: Rect,
    generation: u64,
    work: Work,
}

impl Registration {
    fn kind(&self) -> Kind {
        match self.work {
            Work::Reveal { .. } => Kind::Reveal,
            Work::Parallax { .. } => Kind::Parallax,
        }
    }

    fn observer_count(&self) -> usize {
        match &self.work {
            Work::Reveal { observers, .. } => observers.len(),
            Work::Parallax { .. } => 1,
        }
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    registrations: Vec<Registration>,
    next_generation: u64,
}

impl RegistryInner {
    fn remove(&mut self, container: &str, kind: Kind) -> bool {
        let before = self.registrations.len();
        self.registrations
            .retain(|r| !(r.container == container && r.kind() == kind));
        before != self.registrations.len()
    }

    fn insert(&mut self, container: &Container, rect: Rect, work: Work) -> u64 {
        let kind = match work {
            Work::Reveal { .. } => Kind::Reveal,
            Work::Parallax { .. } => Kind::Parallax,
        };
        if self.remove(container.id(), kind) {
            debug!(
                container = %container.id(),
                "Replaced existing registration on remount"
            );
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.registrations.push(Registration {
            container: container.id().to_string(),
            container_rect: rect,
            generation,
            work,
        });
        generation
    }
}

/// Live scroll observers for every mounted section.
///
/// Cloning is cheap and shares the same registrations.
#[derive(Debug, Clone, Default)]
pub struct ObserverRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register reveal observers for `targets` inside `container`.
    ///
    /// Returns `None` without registering anything when the container is not
    /// attached or there are no targets. Mounting a container that already has
    /// reveal observers replaces them.
    pub fn mount(
        &self,
        container: &Container,
        targets: Vec<RevealTarget>,
        config: RevealConfig,
    ) -> Option<RevealHandle> {
        let Some(rect) = container.rect() else {
            debug!(container = %container.id(), "Container not attached; skipping reveal");
            return None;
        };
        if targets.is_empty() {
            debug!(container = %container.id(), "No reveal targets; nothing to observe");
            return None;
        }

        let observers = targets
            .into_iter()
            .enumerate()
            .map(|(index, target)| Observed {
                key: target.key,
                rect: target.rect,
                index,
                phase: Phase::Hidden,
                fired: false,
            })
            .collect();

        let generation = self
            .write()
            .insert(container, rect, Work::Reveal { config, observers });

        Some(RevealHandle {
            registry: Arc::downgrade(&self.inner),
            container: container.id().to_string(),
            kind: Kind::Reveal,
            generation,
        })
    }

    /// Register a parallax tracker moving `background` inside `container`.
    pub fn mount_parallax(
        &self,
        container: &Container,
        background: impl Into<String>,
        config: ParallaxConfig,
    ) -> Option<RevealHandle> {
        let Some(rect) = container.rect() else {
            debug!(container = %container.id(), "Container not attached; skipping parallax");
            return None;
        };

        let work = Work::Parallax {
            background: background.into(),
            tracker: ParallaxTracker::new(config, rect),
        };
        let generation = self.write().insert(container, rect, work);

        Some(RevealHandle {
            registry: Arc::downgrade(&self.inner),
            container: container.id().to_string(),
            kind: Kind::Parallax,
            generation,
        })
    }

    /// Evaluate every registration against the viewport at time `now` (seconds).
    pub fn dispatch(&self, viewport: Viewport, now: f64) -> ScrollFrame {
        let mut frame = ScrollFrame::default();
        let mut inner = self.write();

        for registration in &mut inner.registrations {
            let container_rect = registration.container_rect;
            match &mut registration.work {
                Work::Reveal { config, observers } => {
                    let container_crossed = config.threshold.is_crossed(&container_rect, &viewport);
                    for observed in observers.iter_mut() {
                        let crossed = match config.scope {
                            TriggerScope::Each => config.threshold.is_crossed(&observed.rect, &viewport),
                            TriggerScope::Container => container_crossed,
                        };
                        if let Some(event) =
                            step(config, observed, crossed, now, &registration.container)
                        {
                            frame.events.push(event);
                        }
                    }
                }
                Work::Parallax {
                    background,
                    tracker,
                } => {
                    let offset_percent = tracker.sample(&viewport, now);
                    frame.parallax.push(ParallaxUpdate {
                        container: registration.container.clone(),
                        background: background.clone(),
                        offset_percent,
                    });
                }
            }
        }

        frame
    }

    /// Visual state of `key` inside `container` at time `now`.
    pub fn visual_state(&self, container: &str, key: &str, now: f64) -> Option<VisualState> {
        let inner = self.read();
        inner.registrations.iter().find_map(|r| match &r.work {
            Work::Reveal { config, observers } if r.container == container => observers
                .iter()
                .find(|o| o.key == key)
                .map(|o| sample(config, o, now)),
            _ => None,
        })
    }

    /// Whether `key` has fired during the current mount of `container`.
    pub fn has_fired(&self, container: &str, key: &str) -> Option<bool> {
        let inner = self.read();
        inner.registrations.iter().find_map(|r| match &r.work {
            Work::Reveal { observers, .. } if r.container == container => {
                observers.iter().find(|o| o.key == key).map(|o| o.fired)
            }
            _ => None,
        })
    }

    /// Total number of live observers (one per reveal target, one per parallax).
    pub fn observer_count(&self) -> usize {
        self.read()
            .registrations
            .iter()
            .map(Registration::observer_count)
            .sum()
    }

    pub fn is_mounted(&self, container: &str) -> bool {
        self.read()
            .registrations
            .iter()
            .any(|r| r.container == container)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Advance one observer; returns the event it produced, if any.
fn step(
    config: &RevealConfig,
    observed: &mut Observed,
    crossed: bool,
    now: f64,
    container: &str,
) -> Option<RevealEvent> {
    let fire = |observed: &mut Observed| {
        observed.phase = Phase::Playing { started_at: now };
        observed.fired = true;
        Some(RevealEvent::Fired {
            container: container.to_string(),
            key: observed.key.clone(),
            index: observed.index,
            delay: config.delay_for(observed.index),
        })
    };

    match (config.mode, observed.phase) {
        (PlayMode::Once, Phase::Hidden) if crossed && !observed.fired => fire(observed),
        (PlayMode::Once, _) => None,
        (PlayMode::Replay, Phase::Hidden | Phase::Reversing { .. }) if crossed => fire(observed),
        (PlayMode::Replay, Phase::Playing { .. }) if !crossed => {
            let from = raw_progress(config, observed, now);
            observed.phase = Phase::Reversing {
                started_at: now,
                from,
            };
            Some(RevealEvent::Reversed {
                container: container.to_string(),
                key: observed.key.clone(),
                index: observed.index,
            })
        }
        (PlayMode::Replay, _) => None,
    }
}

/// Linear (un-eased) tween progress in `[0, 1]`.
fn raw_progress(config: &RevealConfig, observed: &Observed, now: f64) -> f64 {
    let fraction = |elapsed: f64| {
        if config.duration <= 0.0 {
            if elapsed >= 0.0 { 1.0 } else { 0.0 }
        } else {
            (elapsed / config.duration).clamp(0.0, 1.0)
        }
    };

    match observed.phase {
        Phase::Hidden => 0.0,
        Phase::Playing { started_at } => {
            fraction(now - started_at - config.delay_for(observed.index))
        }
        Phase::Reversing { started_at, from } => {
            if config.duration <= 0.0 {
                0.0
            } else {
                (from - (now - started_at) / config.duration).clamp(0.0, 1.0)
            }
        }
    }
}

fn sample(config: &RevealConfig, observed: &Observed, now: f64) -> VisualState {
    match observed.phase {
        Phase::Hidden => VisualState::hidden(config),
        _ => {
            let raw = raw_progress(config, observed, now);
            VisualState::at_progress(config, config.ease.apply(raw))
        }
    }
}

/// Keeps a mount's observers alive; unmounts on drop.
#[derive(Debug)]
#[must_use = "dropping the handle unmounts the observers immediately"]
pub struct RevealHandle {
    registry: Weak<RwLock<RegistryInner>>,
    container: String,
    kind: Kind,
    generation: u64,
}

impl RevealHandle {
    /// Remove this mount's observers.
    pub fn unmount(self) {
        // Drop does the work.
    }

    fn release(&self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        let mut inner = inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = inner.registrations.len();
        // A remount bumps the generation; a stale handle must not remove it.
        inner.registrations.retain(|r| {
            !(r.container == self.container && r.kind() == self.kind && r.generation == self.generation)
        });
        if before != inner.registrations.len() {
            debug!(container = %self.container, "Observers unmounted");
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Threshold;

    const VIEWPORT_HEIGHT: f64 = 800.0;

    fn section() -> Container {
        Container::attached("services", Rect::new(0.0, 1000.0, 1200.0, 900.0))
    }

    /// Three cards stacked 200px apart, starting at y=1100.
    fn cards() -> Vec<RevealTarget> {
        (0..3)
            .map(|i| {
                RevealTarget::new(
                    format!("card-{i}"),
                    Rect::new(0.0, 1100.0 + 200.0 * f64::from(i), 300.0, 150.0),
                )
            })
            .collect()
    }

    fn at(scroll_y: f64) -> Viewport {
        Viewport::new(scroll_y, VIEWPORT_HEIGHT)
    }

    fn fired_keys(frame: &ScrollFrame) -> Vec<&str> {
        frame
            .events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Fired { key, .. } => Some(key.as_str()),
                RevealEvent::Reversed { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_detached_container_registers_nothing() {
        let registry = ObserverRegistry::new();
        let handle = registry.mount(
            &Container::detached("about"),
            cards(),
            RevealConfig::default(),
        );
        assert!(handle.is_none());
        assert_eq!(registry.observer_count(), 0);
    }

    #[test]
    fn test_empty_targets_register_nothing() {
        let registry = ObserverRegistry::new();
        let handle = registry.mount(&section(), Vec::new(), RevealConfig::default());
        assert!(handle.is_none());
        assert!(!registry.is_mounted("services"));
    }

    #[test]
    fn test_each_scope_fires_in_scroll_order() {
        let registry = ObserverRegistry::new();
        let _handle = registry.mount(&section(), cards(), RevealConfig::default());

        // Line at 460 + 640 = 1100: only the first card.
        let frame = registry.dispatch(at(460.0), 0.0);
        assert_eq!(fired_keys(&frame), vec!["card-0"]);

        // Line at 1500: the remaining two.
        let frame = registry.dispatch(at(860.0), 0.1);
        assert_eq!(fired_keys(&frame), vec!["card-1", "card-2"]);
    }

    #[test]
    fn test_once_fires_exactly_once() {
        let registry = ObserverRegistry::new();
        let _handle = registry.mount(&section(), cards(), RevealConfig::default());

        let mut fired = 0;
        for (i, scroll) in [2000.0, 0.0, 2000.0, 100.0, 3000.0].into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let frame = registry.dispatch(at(scroll), i as f64);
            fired += fired_keys(&frame).len();
            assert!(
                frame
                    .events
                    .iter()
                    .all(|e| matches!(e, RevealEvent::Fired { .. }))
            );
        }
        assert_eq!(fired, 3);
        assert_eq!(registry.has_fired("services", "card-0"), Some(true));
    }

    #[test]
    fn test_visual_state_before_and_after() {
        let config = RevealConfig::default();
        let registry = ObserverRegistry::new();
        let _handle = registry.mount(&section(), cards(), config);

        let hidden = registry.visual_state("services", "card-2", 0.0).unwrap();
        assert_eq!(hidden, VisualState::hidden(&config));
        assert_eq!((hidden.opacity, hidden.offset), (0.0, 30.0));

        registry.dispatch(at(2000.0), 1.0);

        // card-2 waits index * stagger = 0.2s before moving.
        let waiting = registry.visual_state("services", "card-2", 1.1).unwrap();
        assert_eq!(waiting.opacity, 0.0);

        let midway = registry.visual_state("services", "card-2", 1.6).unwrap();
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(midway.offset > 0.0 && midway.offset < 30.0);

        let done = registry.visual_state("services", "card-2", 5.0).unwrap();
        assert_eq!(done, VisualState::shown());

        // Scrolling away does not revert a once-mode element.
        registry.dispatch(at(0.0), 6.0);
        assert_eq!(
            registry.visual_state("services", "card-2", 7.0).unwrap(),
            VisualState::shown()
        );
    }

    #[test]
    fn test_replay_reverses_and_refires() {
        let registry = ObserverRegistry::new();
        let config = RevealConfig::default().with_mode(PlayMode::Replay);
        let _handle = registry.mount(&section(), cards(), config);

        assert_eq!(fired_keys(&registry.dispatch(at(2000.0), 0.0)).len(), 3);
        // Staying past the threshold does not fire again.
        assert!(registry.dispatch(at(2100.0), 1.0).events.is_empty());

        let back = registry.dispatch(at(0.0), 2.0);
        assert_eq!(back.events.len(), 3);
        assert!(
            back.events
                .iter()
                .all(|e| matches!(e, RevealEvent::Reversed { .. }))
        );
        assert_eq!(
            registry.visual_state("services", "card-0", 10.0).unwrap(),
            VisualState::hidden(&config)
        );

        assert_eq!(fired_keys(&registry.dispatch(at(2000.0), 11.0)).len(), 3);
    }

    #[test]
    fn test_container_scope_staggers_all_targets() {
        let registry = ObserverRegistry::new();
        let config = RevealConfig::default()
            .with_scope(TriggerScope::Container)
            .with_threshold(Threshold::parse("top 60%").unwrap())
            .with_stagger(0.2);
        let _handle = registry.mount(&section(), cards(), config);

        // Container top (1000) vs line 520 + 480 = 1000.
        let frame = registry.dispatch(at(520.0), 0.0);
        let delays: Vec<f64> = frame
            .events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Fired { delay, .. } => Some(*delay),
                RevealEvent::Reversed { .. } => None,
            })
            .collect();
        assert_eq!(delays.len(), 3);
        assert!((delays[2] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_drop_unmounts() {
        let registry = ObserverRegistry::new();
        let handle = registry.mount(&section(), cards(), RevealConfig::default());
        assert_eq!(registry.observer_count(), 3);

        drop(handle);
        assert_eq!(registry.observer_count(), 0);
        assert!(registry.dispatch(at(2000.0), 0.0).events.is_empty());
    }

    #[test]
    fn test_remount_cycle_is_idempotent() {
        let registry = ObserverRegistry::new();
        for _ in 0..5 {
            let handle = registry
                .mount(&section(), cards(), RevealConfig::default())
                .unwrap();
            handle.unmount();
        }
        assert_eq!(registry.observer_count(), 0);

        let _handle = registry.mount(&section(), cards(), RevealConfig::default());
        assert_eq!(registry.observer_count(), 3);
        assert_eq!(fired_keys(&registry.dispatch(at(2000.0), 0.0)).len(), 3);
    }

    #[test]
    fn test_double_mount_replaces_and_stale_handle_is_inert() {
        let registry = ObserverRegistry::new();
        let stale = registry.mount(&section(), cards(), RevealConfig::default());
        let _fresh = registry.mount(&section(), cards(), RevealConfig::default());
        assert_eq!(registry.observer_count(), 3);

        drop(stale);
        assert_eq!(registry.observer_count(), 3);
        assert_eq!(fired_keys(&registry.dispatch(at(2000.0), 0.0)).len(), 3);
    }

    #[test]
    fn test_parallax_is_continuous() {
        let registry = ObserverRegistry::new();
        let _reveal = registry.mount(&section(), cards(), RevealConfig::default());
        let _parallax = registry.mount_parallax(
            &section(),
            ".bg-pattern",
            ParallaxConfig {
                amount_percent: 20.0,
                scrub: 0.0,
                ..ParallaxConfig::default()
            },
        );
        assert_eq!(registry.observer_count(), 4);

        let first = registry.dispatch(at(500.0), 0.0);
        let second = registry.dispatch(at(900.0), 0.1);
        assert_eq!(first.parallax.len(), 1);
        assert!(second.parallax[0].offset_percent > first.parallax[0].offset_percent);
        assert_eq!(second.parallax[0].background, ".bg-pattern");
    }

    #[test]
    fn test_handle_outliving_registry_is_harmless() {
        let registry = ObserverRegistry::new();
        let handle = registry.mount(&section(), cards(), RevealConfig::default());
        drop(registry);
        drop(handle);
    }
}
