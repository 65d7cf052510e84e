pub mod platform;
pub mod runner;

pub use orrery;
pub use platform::BrowserPlatform;
pub use runner::{ExplorerRunner, WebCoordinator};

/// Generate all `#[wasm_bindgen]` exports for an explorer.
///
/// This macro generates:
/// - `thread_local!` storage for the ExplorerRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (explorer_init, explorer_tick, intents,
///   renderer events, snapshot and command accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod explorer;
/// use explorer::MyExplorer;
///
/// orrery_web::export_explorer!(MyExplorer, "my-explorer");
/// ```
///
/// # Arguments
///
/// - `$explorer_type`: The explorer struct type that implements `orrery::Explorer`
///   and has a `new()` constructor
/// - `$explorer_name`: A string literal used in log messages
///
/// Calls made before a successful `explorer_init` are ignored and return
/// `false`, `-1`, `"null"` or `"[]"` as appropriate.
#[macro_export]
macro_rules! export_explorer {
    ($explorer_type:ty, $explorer_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<
                $crate::ExplorerRunner<$explorer_type, $crate::BrowserPlatform>,
            > = RefCell::new($crate::ExplorerRunner::new(<$explorer_type>::new()));
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::ExplorerRunner<$explorer_type, $crate::BrowserPlatform>) -> R,
        ) -> R {
            RUNNER.with(|cell| f(&mut *cell.borrow_mut()))
        }

        /// Build the coordinator for the given viewport. Returns false if the
        /// catalog could not be built.
        #[wasm_bindgen]
        pub fn explorer_init(width: f32, height: f32, touch_capable: bool) -> bool {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let signals = $crate::orrery::DeviceSignals::new(width, height, touch_capable);
            match with_runner(|r| r.init(signals, $crate::BrowserPlatform)) {
                Ok(()) => {
                    log::info!("{}: initialized", $explorer_name);
                    true
                }
                Err(e) => {
                    log::error!("{}: {}", $explorer_name, e);
                    false
                }
            }
        }

        #[wasm_bindgen]
        pub fn explorer_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn explorer_resize(width: f32, height: f32, touch_capable: bool) {
            with_runner(|r| r.resize(width, height, touch_capable));
        }

        #[wasm_bindgen]
        pub fn explorer_fullscreen_changed(is_fullscreen: bool) {
            with_runner(|r| r.fullscreen_changed(is_fullscreen));
        }

        #[wasm_bindgen]
        pub fn explorer_activate() -> bool {
            with_runner(|r| r.activate())
        }

        #[wasm_bindgen]
        pub fn explorer_deactivate() -> bool {
            with_runner(|r| r.deactivate())
        }

        // ---- Intents ----

        #[wasm_bindgen]
        pub fn explorer_select_body(id: &str) -> bool {
            with_runner(|r| r.select_body(id))
        }

        #[wasm_bindgen]
        pub fn explorer_select_from_map(id: &str) -> bool {
            with_runner(|r| r.select_from_map(id))
        }

        #[wasm_bindgen]
        pub fn explorer_select_location(body: &str, index: u32) -> bool {
            with_runner(|r| r.select_location(body, index))
        }

        #[wasm_bindgen]
        pub fn explorer_set_view_mode(mode: u32) -> bool {
            with_runner(|r| r.set_view_mode(mode))
        }

        #[wasm_bindgen]
        pub fn explorer_set_zoom(value: i32) -> i32 {
            with_runner(|r| r.set_zoom(value))
        }

        #[wasm_bindgen]
        pub fn explorer_toggle_mobile_info() {
            with_runner(|r| r.toggle_mobile_info());
        }

        #[wasm_bindgen]
        pub fn explorer_toggle_mobile_list() {
            with_runner(|r| r.toggle_mobile_list());
        }

        #[wasm_bindgen]
        pub fn explorer_clear_selection() {
            with_runner(|r| r.clear_selection());
        }

        #[wasm_bindgen]
        pub fn explorer_custom_event(kind: u32, a: f32, b: f32, c: f32) -> bool {
            with_runner(|r| r.custom_event(kind, a, b, c))
        }

        // ---- Renderer events (renderer: 0 = globe, 1 = map) ----

        #[wasm_bindgen]
        pub fn explorer_renderer_hover(renderer: u32, hovering: bool) -> bool {
            with_runner(|r| r.renderer_hover(renderer, hovering))
        }

        #[wasm_bindgen]
        pub fn explorer_renderer_zoom(renderer: u32, value: i32) -> bool {
            with_runner(|r| r.renderer_zoom(renderer, value))
        }

        #[wasm_bindgen]
        pub fn explorer_renderer_select_body(renderer: u32, id: &str) -> bool {
            with_runner(|r| r.renderer_select_body(renderer, id))
        }

        #[wasm_bindgen]
        pub fn explorer_renderer_select_location(renderer: u32, body: &str, index: u32) -> bool {
            with_runner(|r| r.renderer_select_location(renderer, body, index))
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_snapshot_json() -> String {
            with_runner(|r| r.snapshot_json())
        }

        #[wasm_bindgen]
        pub fn get_snapshot_ptr() -> *const f32 {
            with_runner(|r| r.snapshot_ptr())
        }

        #[wasm_bindgen]
        pub fn get_snapshot_floats() -> u32 {
            $crate::orrery::SNAPSHOT_FLOATS as u32
        }

        /// Revision as f64 so it survives the trip to a JS number.
        #[wasm_bindgen]
        pub fn get_revision() -> f64 {
            with_runner(|r| r.revision() as f64)
        }

        #[wasm_bindgen]
        pub fn take_globe_commands() -> String {
            with_runner(|r| r.take_commands($crate::orrery::RendererKind::Globe))
        }

        #[wasm_bindgen]
        pub fn take_map_commands() -> String {
            with_runner(|r| r.take_commands($crate::orrery::RendererKind::Map))
        }

        #[wasm_bindgen]
        pub fn get_catalog_json() -> String {
            with_runner(|r| r.catalog_json())
        }

        // ---- Zoom mapping for the JS renderers ----

        #[wasm_bindgen]
        pub fn globe_distance_for_zoom(percent: i32) -> f32 {
            $crate::orrery::zoom_map::globe_distance($crate::orrery::ZoomPercent::new(percent))
        }

        #[wasm_bindgen]
        pub fn globe_zoom_for_distance(distance: f32) -> i32 {
            i32::from($crate::orrery::zoom_map::globe_percent(distance).value())
        }

        #[wasm_bindgen]
        pub fn map_scale_for_zoom(percent: i32) -> f64 {
            $crate::orrery::zoom_map::map_scale($crate::orrery::ZoomPercent::new(percent))
        }

        #[wasm_bindgen]
        pub fn map_zoom_for_scale(scale: f64) -> i32 {
            i32::from($crate::orrery::zoom_map::map_percent(scale).value())
        }
    };
}
