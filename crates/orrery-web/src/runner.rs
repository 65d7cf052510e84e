use orrery::{
    BodyId, CatalogError, CommandQueue, CoordinatorError, DeviceSignals, Explorer,
    FullscreenPlatform, Intent, Location, PresentationSnapshot, RendererEvent, RendererKind,
    SnapshotFrame, ViewCoordinator, ViewMode,
};

/// Coordinator specialised for the browser: both renderers are command
/// queues drained by the JS side.
pub type WebCoordinator<P> = ViewCoordinator<CommandQueue, CommandQueue, P>;

/// Generic explorer runner that owns the coordinator between JS calls.
///
/// Each concrete explorer (e.g., `solar-explorer`) creates a `thread_local!`
/// ExplorerRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// Every forwarding method is a no-op (returning `false` where it reports
/// anything) until [`init`](Self::init) has succeeded.
pub struct ExplorerRunner<E: Explorer, P: FullscreenPlatform> {
    explorer: E,
    coordinator: Option<WebCoordinator<P>>,
    /// Flat snapshot for SharedArrayBuffer-style reads, rebuilt lazily.
    frame: SnapshotFrame,
    frame_revision: Option<u64>,
}

impl<E: Explorer, P: FullscreenPlatform> ExplorerRunner<E, P> {
    pub fn new(explorer: E) -> Self {
        Self {
            explorer,
            coordinator: None,
            frame: SnapshotFrame::default(),
            frame_revision: None,
        }
    }

    /// Build the catalog and the coordinator. Call once after construction;
    /// calling again starts over from startup defaults.
    pub fn init(&mut self, signals: DeviceSignals, platform: P) -> Result<(), CatalogError> {
        let config = self.explorer.config();
        let catalog = self.explorer.catalog()?;
        self.coordinator = Some(ViewCoordinator::new(
            config,
            catalog,
            signals,
            CommandQueue::new(),
            CommandQueue::new(),
            platform,
        ));
        self.frame_revision = None;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.coordinator.is_some()
    }

    pub fn coordinator(&self) -> Option<&WebCoordinator<P>> {
        self.coordinator.as_ref()
    }

    pub fn coordinator_mut(&mut self) -> Option<&mut WebCoordinator<P>> {
        self.coordinator.as_mut()
    }

    /// Advance timers and the activation fade by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(c) = self.coordinator.as_mut() {
            c.tick(dt);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, touch_capable: bool) {
        if let Some(c) = self.coordinator.as_mut() {
            c.on_resize(DeviceSignals::new(width, height, touch_capable));
        }
    }

    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        if let Some(c) = self.coordinator.as_mut() {
            c.on_fullscreen_change(is_fullscreen);
        }
    }

    pub fn activate(&mut self) -> bool {
        self.coordinator.as_mut().is_some_and(|c| c.activate())
    }

    pub fn deactivate(&mut self) -> bool {
        self.coordinator.as_mut().is_some_and(|c| c.deactivate())
    }

    // ---- Selection ----

    pub fn select_body(&mut self, id: &str) -> bool {
        self.with_result(|c| c.select_body(&BodyId::new(id)))
    }

    pub fn select_from_map(&mut self, id: &str) -> bool {
        self.with_result(|c| c.select_from_map(&BodyId::new(id)))
    }

    /// Select the `index`-th location of body `body`.
    pub fn select_location(&mut self, body: &str, index: u32) -> bool {
        self.with_result(|c| {
            let location = lookup_location(c, body, index)?;
            c.select_location(&location)
        })
    }

    pub fn clear_selection(&mut self) {
        if let Some(c) = self.coordinator.as_mut() {
            c.clear_selection();
        }
    }

    // ---- View mode, zoom, panels ----

    /// 0 = orbit, 1 = system. Unknown values are ignored.
    pub fn set_view_mode(&mut self, mode: u32) -> bool {
        let Some(mode) = ViewMode::from_index(mode) else {
            log::warn!("unknown view mode {}", mode);
            return false;
        };
        match self.coordinator.as_mut() {
            Some(c) => {
                c.set_view_mode(mode);
                true
            }
            None => false,
        }
    }

    /// Returns the clamped zoom actually applied, or -1 before init.
    pub fn set_zoom(&mut self, value: i32) -> i32 {
        self.coordinator
            .as_mut()
            .map_or(-1, |c| i32::from(c.set_zoom(value).value()))
    }

    pub fn toggle_mobile_info(&mut self) {
        if let Some(c) = self.coordinator.as_mut() {
            c.toggle_mobile_info();
        }
    }

    pub fn toggle_mobile_list(&mut self) {
        if let Some(c) = self.coordinator.as_mut() {
            c.toggle_mobile_list();
        }
    }

    // ---- Renderer events (kind: 0 = globe, 1 = map) ----

    pub fn renderer_hover(&mut self, kind: u32, hovering: bool) -> bool {
        self.renderer_event(kind, RendererEvent::Hover(hovering))
    }

    pub fn renderer_zoom(&mut self, kind: u32, value: i32) -> bool {
        let Some(source) = renderer_kind(kind) else {
            return false;
        };
        self.coordinator
            .as_mut()
            .is_some_and(|c| c.on_renderer_zoom_changed(source, value))
    }

    pub fn renderer_select_body(&mut self, kind: u32, id: &str) -> bool {
        self.renderer_event(kind, RendererEvent::SelectBody(BodyId::new(id)))
    }

    pub fn renderer_select_location(&mut self, kind: u32, body: &str, index: u32) -> bool {
        let Some(source) = renderer_kind(kind) else {
            return false;
        };
        self.with_outcome(|c| {
            let location = lookup_location(c, body, index)?;
            c.on_renderer_event(source, RendererEvent::SelectLocation(location))
        })
    }

    fn renderer_event(&mut self, kind: u32, event: RendererEvent) -> bool {
        let Some(source) = renderer_kind(kind) else {
            return false;
        };
        self.with_outcome(|c| c.on_renderer_event(source, event))
    }

    /// Decode and apply a numeric intent `(kind, a, b, c)`.
    pub fn custom_event(&mut self, kind: u32, a: f32, b: f32, c: f32) -> bool {
        let Some(coordinator) = self.coordinator.as_mut() else {
            return false;
        };
        let Some(intent) = Intent::from_custom(kind, a, b, c, coordinator.catalog()) else {
            return false;
        };
        self.with_result(|c| c.apply(intent))
    }

    fn with_result(
        &mut self,
        f: impl FnOnce(&mut WebCoordinator<P>) -> orrery::Result<()>,
    ) -> bool {
        self.with_outcome(|c| f(c).map(|()| true))
    }

    /// Run `f` and report whether it took effect. Rejections are logged.
    fn with_outcome(
        &mut self,
        f: impl FnOnce(&mut WebCoordinator<P>) -> orrery::Result<bool>,
    ) -> bool {
        let Some(c) = self.coordinator.as_mut() else {
            log::warn!("explorer not initialized");
            return false;
        };
        match f(c) {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    // ---- Data accessors ----

    pub fn snapshot(&self) -> Option<PresentationSnapshot> {
        self.coordinator.as_ref().map(|c| c.snapshot())
    }

    pub fn snapshot_json(&self) -> String {
        let Some(snapshot) = self.snapshot() else {
            return String::from("null");
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|e| {
            log::warn!("snapshot serialization failed: {}", e);
            String::from("null")
        })
    }

    /// Refresh the flat frame if the state moved since the last read.
    pub fn refresh_frame(&mut self) -> &SnapshotFrame {
        if let Some(c) = self.coordinator.as_ref() {
            if self.frame_revision != Some(c.revision()) {
                self.frame = SnapshotFrame::from_snapshot(&c.snapshot(), c.catalog());
                self.frame_revision = Some(c.revision());
            }
        }
        &self.frame
    }

    pub fn snapshot_ptr(&mut self) -> *const f32 {
        self.refresh_frame().as_floats().as_ptr()
    }

    pub fn revision(&self) -> u64 {
        self.coordinator.as_ref().map_or(0, |c| c.revision())
    }

    /// Drain pending commands for one renderer as JSON.
    pub fn take_commands(&mut self, kind: RendererKind) -> String {
        match (self.coordinator.as_mut(), kind) {
            (Some(c), RendererKind::Globe) => c.globe_mut().drain_json(),
            (Some(c), RendererKind::Map) => c.map_mut().drain_json(),
            (None, _) => String::from("[]"),
        }
    }

    pub fn catalog_json(&self) -> String {
        let Some(c) = self.coordinator.as_ref() else {
            return String::from("[]");
        };
        c.catalog().to_json().unwrap_or_else(|e| {
            log::warn!("catalog serialization failed: {}", e);
            String::from("[]")
        })
    }
}

fn renderer_kind(kind: u32) -> Option<RendererKind> {
    let source = RendererKind::from_index(kind);
    if source.is_none() {
        log::warn!("unknown renderer kind {}", kind);
    }
    source
}

fn lookup_location<P: FullscreenPlatform>(
    c: &WebCoordinator<P>,
    body: &str,
    index: u32,
) -> orrery::Result<Location> {
    let id = BodyId::new(body);
    let found = c
        .catalog()
        .get(&id)
        .ok_or_else(|| CoordinatorError::UnknownBody(id.clone()))?;
    found
        .location(index as usize)
        .cloned()
        .ok_or_else(|| CoordinatorError::LocationMismatch {
            location: format!("{}#{}", body, index),
            active: c.active_body().clone(),
        })
}
