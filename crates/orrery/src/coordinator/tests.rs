use super::*;
use crate::lifecycle::platform::PlatformError;
use crate::renderer::queue::{CommandQueue, RendererCommand};

const CATALOG: &str = r#"{
    "bodies": [
        { "id": "sol", "name": "Sun", "kind": "star" },
        { "id": "mercury", "name": "Mercury" },
        { "id": "earth", "name": "Earth", "locations": [
            { "name": "Quito", "lat": -0.18, "lon": -78.47 },
            { "name": "Reykjavik", "lat": 64.15, "lon": -21.94 }
        ] },
        { "id": "moon", "name": "Moon", "kind": "moon", "locations": [
            { "name": "Tranquility Base", "lat": 0.67, "lon": 23.47 }
        ] },
        { "id": "mars", "name": "Mars", "locations": [
            { "name": "Olympus Mons", "lat": 18.65, "lon": -133.8 },
            { "name": "Jezero", "lat": 18.38, "lon": 77.58 }
        ] },
        { "id": "jupiter", "name": "Jupiter" }
    ]
}"#;

/// Scriptable fullscreen: records requests and can refuse them.
#[derive(Default)]
struct FakePlatform {
    fullscreen: bool,
    deny: bool,
    requests: u32,
    exits: u32,
}

impl FullscreenPlatform for FakePlatform {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> std::result::Result<(), PlatformError> {
        self.requests += 1;
        if self.deny {
            return Err(PlatformError::Denied("no user gesture".into()));
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> std::result::Result<(), PlatformError> {
        self.exits += 1;
        self.fullscreen = false;
        Ok(())
    }
}

type TestCoordinator = ViewCoordinator<CommandQueue, CommandQueue, FakePlatform>;

fn desktop() -> DeviceSignals {
    DeviceSignals::new(1440.0, 900.0, false)
}

fn phone() -> DeviceSignals {
    DeviceSignals::new(390.0, 844.0, true)
}

fn build(config: ExplorerConfig, signals: DeviceSignals) -> TestCoordinator {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    ViewCoordinator::new(
        config,
        catalog,
        signals,
        CommandQueue::new(),
        CommandQueue::new(),
        FakePlatform::default(),
    )
}

fn coordinator(signals: DeviceSignals) -> TestCoordinator {
    build(ExplorerConfig::default(), signals)
}

/// Touch coordinator that has been through a full activation.
fn activated_phone() -> TestCoordinator {
    let mut c = coordinator(phone());
    assert!(c.activate());
    c.tick(1.3);
    assert_eq!(c.activation(), ActivationPhase::Activated);
    c
}

fn location(c: &TestCoordinator, body: &str, index: usize) -> Location {
    c.catalog()
        .get(&BodyId::new(body))
        .and_then(|b| b.location(index))
        .cloned()
        .unwrap()
}

fn drain(c: &mut TestCoordinator) -> (Vec<RendererCommand>, Vec<RendererCommand>) {
    (c.globe_mut().drain(), c.map_mut().drain())
}

fn assert_invariants(c: &TestCoordinator) {
    if let Some(selected) = c.selection() {
        let body = c.catalog().get(c.active_body()).unwrap();
        assert!(body.owns(selected), "{} not on {}", selected.name, body.id);
    }
    let panels = c.panels();
    assert!(!(panels.info && panels.list), "both panels open");
    assert!(c.zoom().value() <= 100);
    assert!(c.catalog().contains(c.active_body()));
}

// ── Startup ──────────────────────────────────────────────────────────

#[test]
fn desktop_starts_activated_in_orbit() {
    let mut c = coordinator(desktop());
    assert_eq!(c.activation(), ActivationPhase::Activated);
    assert_eq!(c.device_class(), DeviceClass::Desktop);
    assert_eq!(c.view_mode(), ViewMode::Orbit);
    assert_eq!(c.active_body(), &BodyId::new("earth"));
    assert_eq!(c.zoom().value(), 50);
    assert!(c.selection().is_none());

    let (globe, map) = drain(&mut c);
    assert_eq!(globe, vec![RendererCommand::SetZoom { percent: ZoomPercent::new(50) }]);
    assert!(map.is_empty());
}

#[test]
fn touch_starts_dormant() {
    let c = coordinator(phone());
    assert_eq!(c.activation(), ActivationPhase::Dormant);
    let snap = c.snapshot();
    assert!(snap.is_mobile);
    assert!(!snap.interactive);
    assert!(snap.prominence < 1.0);
}

#[test]
fn unresolvable_default_body_falls_back_to_first() {
    let config = ExplorerConfig {
        default_body: BodyId::new("vulcan"),
        ..ExplorerConfig::default()
    };
    let c = build(config, desktop());
    assert_eq!(c.active_body(), &BodyId::new("sol"));
    assert_eq!(c.snapshot().active_body_name, "Sun");
}

// ── Selection ────────────────────────────────────────────────────────

#[test]
fn select_body_clears_selection_and_flies_there() {
    let mut c = coordinator(desktop());
    let quito = location(&c, "earth", 0);
    c.select_location(&quito).unwrap();
    drain(&mut c);

    c.select_body(&BodyId::new("mars")).unwrap();
    assert_eq!(c.active_body(), &BodyId::new("mars"));
    assert!(c.selection().is_none());

    let (globe, map) = drain(&mut c);
    assert_eq!(
        globe,
        vec![RendererCommand::FlyTo { target: FlyTarget::Body(BodyId::new("mars")) }]
    );
    assert!(map.is_empty());
}

#[test]
fn unknown_body_is_rejected_without_side_effects() {
    let mut c = coordinator(desktop());
    let quito = location(&c, "earth", 0);
    c.select_location(&quito).unwrap();
    drain(&mut c);
    let before = c.snapshot();

    let err = c.select_body(&BodyId::new("vulcan")).unwrap_err();
    assert_eq!(err, CoordinatorError::UnknownBody(BodyId::new("vulcan")));
    assert!(c.select_from_map(&BodyId::new("vulcan")).is_err());

    assert_eq!(c.snapshot(), before);
    let (globe, map) = drain(&mut c);
    assert!(globe.is_empty() && map.is_empty());
}

#[test]
fn location_from_another_body_is_a_mismatch() {
    let mut c = coordinator(desktop());
    c.select_body(&BodyId::new("earth")).unwrap();
    let jezero = location(&c, "mars", 1);

    let err = c.select_location(&jezero).unwrap_err();
    assert_eq!(
        err,
        CoordinatorError::LocationMismatch {
            location: "Jezero".into(),
            active: BodyId::new("earth"),
        }
    );
    assert!(c.selection().is_none());
    assert_eq!(c.active_body(), &BodyId::new("earth"));
}

#[test]
fn mismatch_keeps_previous_selection() {
    let mut c = coordinator(desktop());
    let quito = location(&c, "earth", 0);
    c.select_location(&quito).unwrap();

    assert!(c.select_location(&location(&c, "moon", 0)).is_err());
    assert_eq!(c.selection(), Some(&quito));
}

#[test]
fn fabricated_location_is_a_mismatch() {
    let mut c = coordinator(desktop());
    let fake = Location {
        body: BodyId::new("earth"),
        name: "Atlantis".into(),
        position: crate::catalog::registry::GeoPoint::new(31.0, -24.0),
    };
    assert!(matches!(
        c.select_location(&fake),
        Err(CoordinatorError::LocationMismatch { .. })
    ));
}

#[test]
fn select_location_flies_the_active_renderer() {
    let mut c = coordinator(desktop());
    drain(&mut c);
    let reykjavik = location(&c, "earth", 1);
    c.select_location(&reykjavik).unwrap();
    let (globe, map) = drain(&mut c);
    assert_eq!(
        globe,
        vec![RendererCommand::FlyTo { target: FlyTarget::Location(reykjavik) }]
    );
    assert!(map.is_empty());
}

#[test]
fn clear_selection_is_unconditional() {
    let mut c = coordinator(desktop());
    c.clear_selection();
    c.select_location(&location(&c, "earth", 0)).unwrap();
    c.clear_selection();
    assert!(c.selection().is_none());
}

// ── Map drill-down ───────────────────────────────────────────────────

fn system_view_of_sol() -> TestCoordinator {
    let config = ExplorerConfig {
        default_body: BodyId::new("sol"),
        ..ExplorerConfig::default()
    };
    let mut c = build(config, desktop());
    c.set_view_mode(ViewMode::System);
    assert_eq!(c.active_body(), &BodyId::new("sol"));
    drain(&mut c);
    c
}

#[test]
fn detailed_body_from_system_map_drills_into_orbit() {
    let mut c = system_view_of_sol();
    c.select_from_map(&BodyId::new("mars")).unwrap();

    assert_eq!(c.view_mode(), ViewMode::Orbit);
    assert_eq!(c.active_body(), &BodyId::new("mars"));
    assert!(c.selection().is_none());

    // The globe takes over: it receives the current zoom, then the flight.
    let (globe, map) = drain(&mut c);
    assert_eq!(
        globe,
        vec![
            RendererCommand::SetZoom { percent: ZoomPercent::new(50) },
            RendererCommand::FlyTo { target: FlyTarget::Body(BodyId::new("mars")) },
        ]
    );
    assert!(map.is_empty());
}

#[test]
fn plain_body_from_system_map_stays_in_system() {
    let mut c = system_view_of_sol();
    c.select_from_map(&BodyId::new("jupiter")).unwrap();
    assert_eq!(c.view_mode(), ViewMode::System);
    assert_eq!(c.active_body(), &BodyId::new("jupiter"));

    let (globe, map) = drain(&mut c);
    assert!(globe.is_empty());
    assert_eq!(
        map,
        vec![RendererCommand::FlyTo { target: FlyTarget::Body(BodyId::new("jupiter")) }]
    );
}

#[test]
fn select_from_map_in_orbit_keeps_orbit() {
    let mut c = coordinator(desktop());
    c.select_from_map(&BodyId::new("jupiter")).unwrap();
    assert_eq!(c.view_mode(), ViewMode::Orbit);
}

#[test]
fn no_implicit_return_to_system() {
    let mut c = system_view_of_sol();
    c.select_from_map(&BodyId::new("moon")).unwrap();
    c.select_location(&location(&c, "moon", 0)).unwrap();
    c.clear_selection();
    assert_eq!(c.view_mode(), ViewMode::Orbit);
}

// ── View mode & zoom ─────────────────────────────────────────────────

#[test]
fn zoom_is_clamped() {
    let mut c = coordinator(desktop());
    assert_eq!(c.set_zoom(150).value(), 100);
    assert_eq!(c.zoom().value(), 100);
    assert_eq!(c.set_zoom(-10).value(), 0);
    assert_eq!(c.zoom().value(), 0);
}

#[test]
fn zoom_in_orbit_reaches_only_the_globe() {
    let mut c = coordinator(desktop());
    drain(&mut c);
    c.set_zoom(42);
    let (globe, map) = drain(&mut c);
    assert_eq!(globe, vec![RendererCommand::SetZoom { percent: ZoomPercent::new(42) }]);
    assert!(map.is_empty());
}

#[test]
fn zoom_in_system_reaches_only_the_map() {
    let mut c = coordinator(desktop());
    c.set_view_mode(ViewMode::System);
    drain(&mut c);
    c.set_zoom(80);
    let (globe, map) = drain(&mut c);
    assert!(globe.is_empty());
    assert_eq!(map, vec![RendererCommand::SetZoom { percent: ZoomPercent::new(80) }]);
}

#[test]
fn view_mode_switch_keeps_selection_and_syncs_zoom() {
    let mut c = coordinator(desktop());
    let quito = location(&c, "earth", 0);
    c.select_location(&quito).unwrap();
    c.set_zoom(70);
    drain(&mut c);

    c.set_view_mode(ViewMode::System);
    assert_eq!(c.selection(), Some(&quito));
    assert_eq!(c.zoom().value(), 70);
    let (globe, map) = drain(&mut c);
    assert!(globe.is_empty());
    assert_eq!(map, vec![RendererCommand::SetZoom { percent: ZoomPercent::new(70) }]);

    let rev = c.revision();
    c.set_view_mode(ViewMode::System);
    assert_eq!(c.revision(), rev);
    assert!(c.map().is_empty());
}

#[test]
fn renderer_zoom_is_mirrored_without_echo() {
    let mut c = coordinator(desktop());
    drain(&mut c);
    assert!(c.on_renderer_zoom_changed(RendererKind::Globe, 63));
    assert_eq!(c.zoom().value(), 63);
    assert!(c.on_renderer_zoom_changed(RendererKind::Globe, 400));
    assert_eq!(c.zoom().value(), 100);

    let (globe, map) = drain(&mut c);
    assert!(globe.is_empty() && map.is_empty());
}

#[test]
fn inactive_renderer_zoom_is_ignored() {
    let mut c = coordinator(desktop());
    c.set_zoom(20);
    assert!(!c.on_renderer_zoom_changed(RendererKind::Map, 90));
    assert_eq!(c.zoom().value(), 20);
}

// ── Renderer events ──────────────────────────────────────────────────

#[test]
fn hover_from_active_renderer_drives_cursor() {
    let mut c = coordinator(desktop());
    assert!(c.on_renderer_event(RendererKind::Globe, RendererEvent::Hover(true)).unwrap());
    assert_eq!(c.snapshot().cursor, Cursor::Pointer);

    assert!(!c.on_renderer_event(RendererKind::Map, RendererEvent::Hover(false)).unwrap());
    assert_eq!(c.snapshot().cursor, Cursor::Pointer);

    c.set_view_mode(ViewMode::System);
    assert_eq!(c.snapshot().cursor, Cursor::Default);
}

#[test]
fn map_body_pick_goes_through_drill_down() {
    let mut c = system_view_of_sol();
    let applied = c
        .on_renderer_event(RendererKind::Map, RendererEvent::SelectBody(BodyId::new("earth")))
        .unwrap();
    assert!(applied);
    assert_eq!(c.view_mode(), ViewMode::Orbit);
    assert_eq!(c.active_body(), &BodyId::new("earth"));
}

#[test]
fn globe_location_pick_is_validated() {
    let mut c = coordinator(desktop());
    let quito = location(&c, "earth", 0);
    c.on_renderer_event(RendererKind::Globe, RendererEvent::SelectLocation(quito.clone()))
        .unwrap();
    assert_eq!(c.selection(), Some(&quito));

    let olympus = location(&c, "mars", 0);
    assert!(c
        .on_renderer_event(RendererKind::Globe, RendererEvent::SelectLocation(olympus))
        .is_err());
    assert_eq!(c.selection(), Some(&quito));
}

#[test]
fn events_from_inactive_renderer_are_dropped() {
    let mut c = coordinator(desktop());
    let picked = c
        .on_renderer_event(RendererKind::Map, RendererEvent::SelectBody(BodyId::new("mars")))
        .unwrap();
    assert!(!picked);
    assert!(!c.on_renderer_event(RendererKind::Map, RendererEvent::ZoomChanged(5)).unwrap());
    assert_eq!(c.active_body(), &BodyId::new("earth"));
    assert_eq!(c.zoom().value(), 50);
}

#[test]
fn dormant_view_ignores_picks_but_mirrors_zoom() {
    let mut c = coordinator(phone());
    let picked = c
        .on_renderer_event(RendererKind::Globe, RendererEvent::SelectBody(BodyId::new("mars")))
        .unwrap();
    assert!(!picked);
    assert!(!c.on_renderer_event(RendererKind::Globe, RendererEvent::Hover(true)).unwrap());
    assert!(c.on_renderer_event(RendererKind::Globe, RendererEvent::ZoomChanged(12)).unwrap());
    assert_eq!(c.active_body(), &BodyId::new("earth"));
    assert_eq!(c.snapshot().cursor, Cursor::Default);
    assert_eq!(c.zoom().value(), 12);
}

// ── Mobile panels ────────────────────────────────────────────────────

#[test]
fn touch_panels_are_mutually_exclusive() {
    let mut c = activated_phone();
    assert_eq!(c.panels(), PanelVisibility { info: false, list: false });
    c.toggle_mobile_info();
    assert_eq!(c.panels(), PanelVisibility { info: true, list: false });
    c.toggle_mobile_list();
    assert_eq!(c.panels(), PanelVisibility { info: false, list: true });
}

#[test]
fn panel_toggles_are_noops_on_desktop() {
    let mut c = coordinator(desktop());
    let rev = c.revision();
    c.toggle_mobile_info();
    c.toggle_mobile_list();
    assert_eq!(c.panels(), PanelVisibility::default());
    assert_eq!(c.revision(), rev);
}

#[test]
fn touch_body_pick_closes_list() {
    let mut c = activated_phone();
    c.toggle_mobile_list();
    c.select_body(&BodyId::new("mars")).unwrap();
    assert!(!c.panels().list);

    c.toggle_mobile_info();
    c.select_body(&BodyId::new("moon")).unwrap();
    assert!(c.panels().info, "only the list panel closes on body pick");
}

#[test]
fn touch_location_pick_closes_both_panels() {
    let mut c = activated_phone();
    c.toggle_mobile_info();
    c.select_location(&location(&c, "earth", 1)).unwrap();
    assert_eq!(c.panels(), PanelVisibility::default());
}

// ── Activation lifecycle ─────────────────────────────────────────────

#[test]
fn activation_transitions_then_requests_fullscreen() {
    let mut c = coordinator(phone());
    assert!(c.activate());
    assert_eq!(c.activation(), ActivationPhase::Transitioning);
    assert!(!c.activate(), "activate is a no-op while transitioning");

    c.tick(0.6);
    assert_eq!(c.activation(), ActivationPhase::Transitioning);
    assert_eq!(c.platform().requests, 0);

    c.tick(0.7);
    assert_eq!(c.activation(), ActivationPhase::Activated);
    assert_eq!(c.platform().requests, 1);
    assert!(c.platform().fullscreen);
    assert!(!c.activate());
}

#[test]
fn fullscreen_denial_leaves_view_activated_windowed() {
    let mut c = coordinator(phone());
    c.platform_mut().deny = true;
    c.activate();
    c.tick(2.0);
    assert_eq!(c.activation(), ActivationPhase::Activated);
    assert_eq!(c.platform().requests, 1);
    assert!(!c.platform().fullscreen);
}

#[test]
fn deactivate_during_transition_wins_over_timer() {
    let mut c = coordinator(phone());
    c.activate();
    c.tick(0.5);
    assert!(c.deactivate());
    c.tick(5.0);
    assert_eq!(c.activation(), ActivationPhase::Dormant);
    assert_eq!(c.platform().requests, 0);
}

#[test]
fn stale_timer_does_not_finish_a_newer_activation_early() {
    let mut c = coordinator(phone());
    c.activate();
    c.tick(0.6);
    c.deactivate();
    c.activate();
    // First timer comes due here; it belongs to the superseded transition.
    c.tick(0.7);
    assert_eq!(c.activation(), ActivationPhase::Transitioning);
    c.tick(0.6);
    assert_eq!(c.activation(), ActivationPhase::Activated);
}

#[test]
fn deactivate_resets_selection_zoom_and_fullscreen() {
    let mut c = activated_phone();
    c.select_location(&location(&c, "earth", 0)).unwrap();
    c.set_zoom(90);
    drain(&mut c);

    assert!(c.deactivate());
    assert_eq!(c.activation(), ActivationPhase::Dormant);
    assert!(c.selection().is_none());
    assert_eq!(c.zoom().value(), 50);
    assert_eq!(c.platform().exits, 1);
    assert!(!c.platform().fullscreen);
    let (globe, _) = drain(&mut c);
    assert_eq!(globe, vec![RendererCommand::SetZoom { percent: ZoomPercent::new(50) }]);
}

#[test]
fn deactivate_is_safe_to_repeat() {
    let mut c = activated_phone();
    assert!(c.deactivate());
    assert!(!c.deactivate());
    assert!(!c.deactivate());
    assert_eq!(c.platform().exits, 1);
    assert_eq!(c.activation(), ActivationPhase::Dormant);
}

#[test]
fn windowed_deactivate_skips_exit_request() {
    let mut c = coordinator(phone());
    c.platform_mut().deny = true;
    c.activate();
    c.tick(2.0);
    c.deactivate();
    assert_eq!(c.platform().exits, 0);
}

#[test]
fn platform_fullscreen_exit_deactivates_touch() {
    let mut c = activated_phone();
    c.select_location(&location(&c, "earth", 0)).unwrap();
    c.platform_mut().fullscreen = false;
    c.on_fullscreen_change(false);
    assert_eq!(c.activation(), ActivationPhase::Dormant);
    assert!(c.selection().is_none());
    assert_eq!(c.zoom().value(), 50);
}

#[test]
fn platform_fullscreen_exit_keeps_desktop_active() {
    let mut c = coordinator(desktop());
    c.on_fullscreen_change(true);
    c.on_fullscreen_change(false);
    assert_eq!(c.activation(), ActivationPhase::Activated);
}

#[test]
fn platform_exit_during_transition_is_ignored() {
    let mut c = coordinator(phone());
    c.activate();
    c.on_fullscreen_change(false);
    assert_eq!(c.activation(), ActivationPhase::Transitioning);
}

#[test]
fn late_fullscreen_entry_after_deactivate_is_undone() {
    let mut c = activated_phone();
    c.platform_mut().fullscreen = false;
    c.deactivate();
    // The platform resolves an earlier request only now.
    c.platform_mut().fullscreen = true;
    c.on_fullscreen_change(true);
    assert_eq!(c.activation(), ActivationPhase::Dormant);
    assert!(!c.platform().fullscreen);
    assert_eq!(c.platform().exits, 1);
}

#[test]
fn fullscreen_we_never_requested_is_left_alone() {
    let mut c = coordinator(desktop());
    c.deactivate();
    // Another element or the user goes fullscreen.
    c.platform_mut().fullscreen = true;
    c.on_fullscreen_change(true);
    assert_eq!(c.platform().requests, 0);
    assert_eq!(c.platform().exits, 0);
    assert!(c.platform().fullscreen);

    let mut dormant = coordinator(phone());
    dormant.platform_mut().fullscreen = true;
    dormant.on_fullscreen_change(true);
    assert_eq!(dormant.platform().exits, 0);
}

#[test]
fn confirmed_request_is_not_undone_later() {
    let mut c = activated_phone();
    c.on_fullscreen_change(true);
    assert_eq!(c.platform().exits, 0);

    c.deactivate();
    assert_eq!(c.platform().exits, 1);
    c.platform_mut().fullscreen = true;
    c.on_fullscreen_change(true);
    assert_eq!(c.platform().exits, 1);
    assert!(c.platform().fullscreen);
}

#[test]
fn denied_request_leaves_nothing_to_undo() {
    let mut c = coordinator(phone());
    c.platform_mut().deny = true;
    c.activate();
    c.tick(2.0);
    c.deactivate();
    c.platform_mut().fullscreen = true;
    c.on_fullscreen_change(true);
    assert_eq!(c.platform().exits, 0);
}

#[test]
fn prominence_follows_the_transition() {
    let mut c = coordinator(phone());
    let dormant = c.snapshot().prominence;
    c.activate();
    c.tick(0.6);
    let mid = c.snapshot().prominence;
    c.tick(1.0);
    let done = c.snapshot().prominence;
    assert!(dormant < mid && mid < done, "{} {} {}", dormant, mid, done);
    assert_eq!(done, 1.0);
}

// ── Device class ─────────────────────────────────────────────────────

#[test]
fn becoming_desktop_auto_activates() {
    let mut c = coordinator(phone());
    c.toggle_mobile_info();
    c.on_resize(desktop());
    assert_eq!(c.device_class(), DeviceClass::Desktop);
    assert_eq!(c.activation(), ActivationPhase::Activated);
    assert_eq!(c.panels(), PanelVisibility::default());
    assert_eq!(c.platform().requests, 0);
}

#[test]
fn becoming_touch_does_not_deactivate() {
    let mut c = coordinator(desktop());
    c.on_resize(phone());
    assert_eq!(c.device_class(), DeviceClass::Touch);
    assert_eq!(c.activation(), ActivationPhase::Activated);
}

#[test]
fn resize_within_class_changes_nothing() {
    let mut c = coordinator(phone());
    let rev = c.revision();
    c.on_resize(DeviceSignals::new(412.0, 915.0, true));
    assert_eq!(c.revision(), rev);
}

#[test]
fn becoming_desktop_mid_transition_lets_timer_finish() {
    let mut c = coordinator(phone());
    c.activate();
    c.on_resize(desktop());
    assert_eq!(c.activation(), ActivationPhase::Transitioning);
    c.tick(1.3);
    assert_eq!(c.activation(), ActivationPhase::Activated);
}

// ── Intents & revisions ──────────────────────────────────────────────

#[test]
fn apply_dispatches_intents() {
    let mut c = coordinator(phone());
    c.apply(Intent::Activate).unwrap();
    c.tick(1.5);
    c.apply(Intent::SetViewMode(ViewMode::System)).unwrap();
    c.apply(Intent::SelectFromMap(BodyId::new("moon"))).unwrap();
    assert_eq!(c.view_mode(), ViewMode::Orbit);
    c.apply(Intent::SetZoom(77)).unwrap();
    c.apply(Intent::ToggleMobileList).unwrap();
    assert!(c.panels().list);
    assert!(c.apply(Intent::SelectBody(BodyId::new("pluto"))).is_err());
    c.apply(Intent::Resize(desktop())).unwrap();
    assert_eq!(c.device_class(), DeviceClass::Desktop);
    c.apply(Intent::Deactivate).unwrap();
    assert_eq!(c.activation(), ActivationPhase::Dormant);
}

#[test]
fn revision_moves_only_on_change() {
    let mut c = coordinator(desktop());
    let r0 = c.revision();
    c.set_zoom(50);
    c.clear_selection();
    c.tick(1.0);
    assert_eq!(c.revision(), r0);
    c.set_zoom(51);
    assert_eq!(c.revision(), r0 + 1);
    assert_eq!(c.snapshot().revision, r0 + 1);
}

/// Seedable xorshift64 for the invariant walk.
struct Rng(u64);

impl Rng {
    fn next(&mut self, bound: u64) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x % bound
    }
}

#[test]
fn invariants_hold_across_a_long_walk() {
    let bodies = ["sol", "mercury", "earth", "moon", "mars", "jupiter", "vulcan"];
    let mut c = coordinator(phone());
    let mut rng = Rng(0x5eed);

    for _ in 0..2000 {
        let body = BodyId::new(bodies[rng.next(bodies.len() as u64) as usize]);
        match rng.next(13) {
            0 => {
                let _ = c.select_body(&body);
            }
            1 => {
                let _ = c.select_from_map(&body);
            }
            2 | 3 => {
                let locations = c
                    .catalog()
                    .get(&body)
                    .map(|b| b.locations.clone())
                    .unwrap_or_default();
                if !locations.is_empty() {
                    let pick = &locations[rng.next(locations.len() as u64) as usize];
                    let before = c.selection().cloned();
                    if c.select_location(pick).is_err() {
                        assert_eq!(c.selection().cloned(), before);
                    }
                }
            }
            4 => c.set_view_mode(if rng.next(2) == 0 { ViewMode::Orbit } else { ViewMode::System }),
            5 => {
                c.set_zoom(rng.next(300) as i32 - 100);
            }
            6 => c.toggle_mobile_info(),
            7 => c.toggle_mobile_list(),
            8 => {
                c.activate();
            }
            9 => {
                c.deactivate();
            }
            10 => c.tick(rng.next(8) as f32 * 0.25),
            11 => c.on_fullscreen_change(rng.next(2) == 0),
            _ => c.on_resize(if rng.next(2) == 0 { phone() } else { desktop() }),
        }
        assert_invariants(&c);
    }
}
