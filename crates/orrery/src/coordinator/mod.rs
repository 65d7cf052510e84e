//! View-state coordinator.
//!
//! Owns the interaction state (active body, view mode, unified zoom,
//! selection, mobile panels) together with the activation lifecycle and
//! device classifier, and keeps the globe and map renderers consistent with
//! it. Every device-class-dependent behavior lives in the operation bodies
//! here, not in presentation code.
//!
//! All operations mutate state synchronously. The only deferred work is the
//! activation transition timer (advanced by [`ViewCoordinator::tick`]) and
//! the platform's fullscreen completion (reported through
//! [`ViewCoordinator::on_fullscreen_change`]); both are checked against the
//! current phase before they take effect.

pub mod state;

#[cfg(test)]
mod tests;

use crate::api::error::{CoordinatorError, Result};
use crate::api::explorer::ExplorerConfig;
use crate::api::types::{BodyId, Cursor, DeviceClass, PanelVisibility, ViewMode};
use crate::catalog::registry::{Catalog, Location};
use crate::core::timer::TimerQueue;
use crate::core::zoom::ZoomPercent;
use crate::device::classifier::{DeviceClassifier, DeviceSignals};
use crate::input::intent::Intent;
use crate::lifecycle::activation::{ActivationLifecycle, ActivationPhase, TransitionToken};
use crate::lifecycle::platform::FullscreenPlatform;
use crate::renderer::handle::{FlyTarget, RendererEvent, RendererHandle, RendererKind};

pub use state::{InteractionState, PresentationSnapshot};

pub struct ViewCoordinator<G, M, P>
where
    G: RendererHandle,
    M: RendererHandle,
    P: FullscreenPlatform,
{
    config: ExplorerConfig,
    catalog: Catalog,
    state: InteractionState,
    classifier: DeviceClassifier,
    lifecycle: ActivationLifecycle,
    timers: TimerQueue<TransitionToken>,
    globe: G,
    map: M,
    platform: P,
    /// Activation whose fullscreen request has not been confirmed yet.
    fullscreen_request: Option<TransitionToken>,
    revision: u64,
}

impl<G, M, P> ViewCoordinator<G, M, P>
where
    G: RendererHandle,
    M: RendererHandle,
    P: FullscreenPlatform,
{
    /// Create the coordinator with startup defaults: orbit view of the
    /// default body, no selection, default zoom pushed to the globe.
    /// Desktop-class devices start activated; touch devices start dormant.
    pub fn new(
        config: ExplorerConfig,
        catalog: Catalog,
        signals: DeviceSignals,
        globe: G,
        map: M,
        platform: P,
    ) -> Self {
        let classifier = DeviceClassifier::new(config.small_screen_px, signals);
        let initial = match classifier.classify() {
            DeviceClass::Desktop => ActivationPhase::Activated,
            DeviceClass::Touch => ActivationPhase::Dormant,
        };
        let lifecycle =
            ActivationLifecycle::new(initial, config.transition_secs, config.transition_easing);
        let active_body = catalog
            .resolve(&config.default_body, &config.default_body)
            .id
            .clone();
        let zoom = ZoomPercent::new(config.default_zoom);

        let mut coordinator = Self {
            state: InteractionState::new(active_body, zoom),
            config,
            catalog,
            classifier,
            lifecycle,
            timers: TimerQueue::new(),
            globe,
            map,
            platform,
            fullscreen_request: None,
            revision: 0,
        };
        coordinator.active_renderer().set_zoom(zoom);
        log::info!(
            "coordinator ready: {} bodies, {:?} device, {:?}",
            coordinator.catalog.len(),
            coordinator.classifier.classify(),
            initial
        );
        coordinator
    }

    // ── Routing ────────────────────────────────────────────────────

    fn active_kind(&self) -> RendererKind {
        self.state.view_mode.renderer()
    }

    /// The renderer that is live for the current view mode.
    fn active_renderer(&mut self) -> &mut dyn RendererHandle {
        match self.active_kind() {
            RendererKind::Globe => &mut self.globe,
            RendererKind::Map => &mut self.map,
        }
    }

    fn is_touch(&self) -> bool {
        self.classifier.classify().is_touch()
    }

    fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ── Selection ──────────────────────────────────────────────────

    /// Make `id` the active body and clear the selection. On touch devices
    /// this also closes the list panel the pick came from.
    pub fn select_body(&mut self, id: &BodyId) -> Result<()> {
        self.ensure_known(id)?;
        self.commit_body(id, false);
        Ok(())
    }

    /// Like [`select_body`](Self::select_body), and picking a detailed body
    /// while in system view drills into its orbit view. Non-detailed bodies
    /// leave the view mode alone; there is no inverse rule.
    pub fn select_from_map(&mut self, id: &BodyId) -> Result<()> {
        self.ensure_known(id)?;
        let drill = self.state.view_mode == ViewMode::System && self.config.is_detailed(id);
        self.commit_body(id, drill);
        Ok(())
    }

    fn ensure_known(&self, id: &BodyId) -> Result<()> {
        if self.catalog.contains(id) {
            return Ok(());
        }
        log::warn!("rejected selection of unknown body '{}'", id);
        Err(CoordinatorError::UnknownBody(id.clone()))
    }

    fn commit_body(&mut self, id: &BodyId, drill_into_orbit: bool) {
        self.state.active_body = id.clone();
        self.state.selection = None;
        if self.is_touch() {
            self.state.panels.list = false;
        }
        if drill_into_orbit {
            self.switch_mode(ViewMode::Orbit);
        }
        self.active_renderer().fly_to(&FlyTarget::Body(id.clone()));
        log::debug!("active body -> {}", id);
        self.mark_changed();
    }

    /// Select a location of the active body. The active body is never
    /// re-targeted implicitly: a location from another body is rejected.
    /// On touch devices both mobile panels close.
    pub fn select_location(&mut self, location: &Location) -> Result<()> {
        let owned = self
            .catalog
            .get(&self.state.active_body)
            .is_some_and(|body| body.owns(location));
        if !owned {
            log::warn!(
                "rejected location '{}' of '{}' while '{}' is active",
                location.name,
                location.body,
                self.state.active_body
            );
            return Err(CoordinatorError::LocationMismatch {
                location: location.name.clone(),
                active: self.state.active_body.clone(),
            });
        }

        self.state.selection = Some(location.clone());
        if self.is_touch() {
            self.state.panels.close_all();
        }
        self.active_renderer()
            .fly_to(&FlyTarget::Location(location.clone()));
        self.mark_changed();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.state.selection.take().is_some() {
            self.mark_changed();
        }
    }

    // ── View mode & zoom ───────────────────────────────────────────

    /// Switch views. Selection and zoom are kept; the current zoom is pushed
    /// to the newly active renderer so both stay in step.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.switch_mode(mode) {
            self.mark_changed();
        }
    }

    fn switch_mode(&mut self, mode: ViewMode) -> bool {
        if self.state.view_mode == mode {
            return false;
        }
        self.state.view_mode = mode;
        self.state.hovering = false;
        let zoom = self.state.zoom;
        self.active_renderer().set_zoom(zoom);
        log::debug!("view mode -> {:?}", mode);
        true
    }

    /// The shared zoom control. Clamps to 0–100, stores, and forwards to the
    /// active renderer only.
    pub fn set_zoom(&mut self, value: i32) -> ZoomPercent {
        let zoom = ZoomPercent::new(value);
        self.active_renderer().set_zoom(zoom);
        if self.state.zoom != zoom {
            self.state.zoom = zoom;
            self.mark_changed();
        }
        zoom
    }

    /// A renderer changed its own zoom (pinch, wheel). Mirrors the value
    /// without commanding the renderer back. Returns false if `source` is
    /// not the active renderer, in which case nothing changes.
    pub fn on_renderer_zoom_changed(&mut self, source: RendererKind, value: i32) -> bool {
        if source != self.active_kind() {
            log::debug!("ignoring zoom {} from inactive {:?} renderer", value, source);
            return false;
        }
        let zoom = ZoomPercent::new(value);
        if self.state.zoom != zoom {
            self.state.zoom = zoom;
            self.mark_changed();
        }
        true
    }

    /// Route an event emitted by a renderer. Returns Ok(false) when the event
    /// was dropped: it came from the inactive renderer, or it needs an
    /// activated view. Zoom changes are mirrored in every phase.
    pub fn on_renderer_event(
        &mut self,
        source: RendererKind,
        event: RendererEvent,
    ) -> Result<bool> {
        if source != self.active_kind() {
            log::debug!("ignoring {:?} from inactive {:?} renderer", event, source);
            return Ok(false);
        }
        match event {
            RendererEvent::ZoomChanged(value) => Ok(self.on_renderer_zoom_changed(source, value)),
            _ if !self.lifecycle.is_interactive() => {
                log::debug!("ignoring {:?} while {:?}", event, self.lifecycle.phase());
                Ok(false)
            }
            RendererEvent::Hover(hovering) => {
                if self.state.hovering != hovering {
                    self.state.hovering = hovering;
                    self.mark_changed();
                }
                Ok(true)
            }
            RendererEvent::SelectLocation(location) => {
                self.select_location(&location).map(|()| true)
            }
            RendererEvent::SelectBody(id) => {
                let picked = match source {
                    RendererKind::Map => self.select_from_map(&id),
                    RendererKind::Globe => self.select_body(&id),
                };
                picked.map(|()| true)
            }
        }
    }

    // ── Mobile panels ──────────────────────────────────────────────

    /// Flip the info panel (closing the list). No-op on desktop.
    pub fn toggle_mobile_info(&mut self) {
        if !self.is_touch() {
            return;
        }
        self.state.panels.toggle_info();
        self.mark_changed();
    }

    /// Flip the list panel (closing info). No-op on desktop.
    pub fn toggle_mobile_list(&mut self) {
        if !self.is_touch() {
            return;
        }
        self.state.panels.toggle_list();
        self.mark_changed();
    }

    // ── Activation lifecycle ───────────────────────────────────────

    /// Start the dormant → activated transition. Returns false (and does
    /// nothing) unless dormant. Fullscreen is requested once the transition
    /// timer fires.
    pub fn activate(&mut self) -> bool {
        match self.lifecycle.begin() {
            Some(token) => {
                self.timers.schedule(self.lifecycle.transition_secs(), token);
                log::info!("activation started");
                self.mark_changed();
                true
            }
            None => {
                log::debug!("activate ignored while {:?}", self.lifecycle.phase());
                false
            }
        }
    }

    /// Leave fullscreen if needed and return to the dormant preview, clearing
    /// the selection and restoring the default zoom. Overrides a pending
    /// transition. Returns false if already dormant.
    pub fn deactivate(&mut self) -> bool {
        if self.lifecycle.phase() == ActivationPhase::Dormant {
            return false;
        }
        if self.platform.is_fullscreen() {
            if let Err(e) = self.platform.exit_fullscreen() {
                log::debug!("exit fullscreen failed: {}", e);
            }
        }
        self.reset_to_dormant();
        true
    }

    fn reset_to_dormant(&mut self) {
        self.lifecycle.reset();
        self.state.selection = None;
        self.state.hovering = false;
        let zoom = ZoomPercent::new(self.config.default_zoom);
        self.state.zoom = zoom;
        self.active_renderer().set_zoom(zoom);
        log::info!("deactivated");
        self.mark_changed();
    }

    /// Advance deferred work by `dt` seconds: fire due transition timers and
    /// move the activation fade along.
    pub fn tick(&mut self, dt: f32) {
        for token in self.timers.advance(dt) {
            self.finish_transition(token);
        }
        if self.lifecycle.phase() == ActivationPhase::Transitioning {
            self.lifecycle.advance(dt);
            self.mark_changed();
        }
    }

    fn finish_transition(&mut self, token: TransitionToken) {
        if !self.lifecycle.complete(token) {
            log::debug!("discarding stale activation timer ({:?})", self.lifecycle.phase());
            return;
        }
        log::info!("activated");
        self.mark_changed();
        match self.platform.request_fullscreen() {
            Ok(()) => self.fullscreen_request = Some(token),
            Err(e) => log::debug!("staying windowed: {}", e),
        }
    }

    /// Platform fullscreen state changed, for whatever reason. On touch
    /// devices, leaving fullscreen while activated returns to the preview.
    /// Entering fullscreen through a request of ours whose activation has
    /// since been superseded is a stale completion and is undone; entries
    /// we never requested are left alone.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        let phase = self.lifecycle.phase();
        if is_fullscreen {
            let Some(token) = self.fullscreen_request.take() else {
                return;
            };
            if !self.lifecycle.is_current(token) {
                log::debug!("stale fullscreen entry while {:?}; leaving again", phase);
                if let Err(e) = self.platform.exit_fullscreen() {
                    log::debug!("exit fullscreen failed: {}", e);
                }
            }
            return;
        }
        if self.is_touch() && phase == ActivationPhase::Activated {
            log::info!("platform left fullscreen on touch device");
            self.reset_to_dormant();
        }
    }

    // ── Device class ───────────────────────────────────────────────

    /// Viewport or input capability changed. Becoming desktop-class closes
    /// the mobile panels and activates a dormant view directly; becoming
    /// touch-class never deactivates.
    pub fn on_resize(&mut self, signals: DeviceSignals) {
        let Some(class) = self.classifier.on_resize(signals) else {
            return;
        };
        self.mark_changed();
        if class == DeviceClass::Desktop {
            self.state.panels.close_all();
            if self.lifecycle.force_activated() {
                log::info!("desktop device: activated without overlay");
            }
        }
    }

    // ── Intents ────────────────────────────────────────────────────

    /// Dispatch a decoded user or platform intent.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::SelectBody(id) => self.select_body(&id),
            Intent::SelectFromMap(id) => self.select_from_map(&id),
            Intent::SelectLocation(location) => self.select_location(&location),
            Intent::SetViewMode(mode) => {
                self.set_view_mode(mode);
                Ok(())
            }
            Intent::SetZoom(value) => {
                self.set_zoom(value);
                Ok(())
            }
            Intent::ToggleMobileInfo => {
                self.toggle_mobile_info();
                Ok(())
            }
            Intent::ToggleMobileList => {
                self.toggle_mobile_list();
                Ok(())
            }
            Intent::ClearSelection => {
                self.clear_selection();
                Ok(())
            }
            Intent::Activate => {
                self.activate();
                Ok(())
            }
            Intent::Deactivate => {
                self.deactivate();
                Ok(())
            }
            Intent::Resize(signals) => {
                self.on_resize(signals);
                Ok(())
            }
        }
    }

    // ── Read access ────────────────────────────────────────────────

    pub fn snapshot(&self) -> PresentationSnapshot {
        let body = self
            .catalog
            .resolve(&self.state.active_body, &self.config.default_body);
        let device = self.classifier.classify();
        let interactive = self.lifecycle.is_interactive();
        PresentationSnapshot {
            revision: self.revision,
            active_body: body.id.clone(),
            active_body_name: body.name.clone(),
            view_mode: self.state.view_mode,
            zoom: self.state.zoom,
            selection: self.state.selection.clone(),
            activation: self.lifecycle.phase(),
            interactive,
            prominence: self.lifecycle.prominence(),
            device,
            is_mobile: device.is_touch(),
            panels: self.state.panels,
            cursor: if self.state.hovering && interactive {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn active_body(&self) -> &BodyId {
        &self.state.active_body
    }

    pub fn selection(&self) -> Option<&Location> {
        self.state.selection.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn zoom(&self) -> ZoomPercent {
        self.state.zoom
    }

    pub fn panels(&self) -> PanelVisibility {
        self.state.panels
    }

    pub fn activation(&self) -> ActivationPhase {
        self.lifecycle.phase()
    }

    pub fn device_class(&self) -> DeviceClass {
        self.classifier.classify()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn globe(&self) -> &G {
        &self.globe
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn globe_mut(&mut self) -> &mut G {
        &mut self.globe
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
