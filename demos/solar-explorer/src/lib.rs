use wasm_bindgen::prelude::*;

mod bodies;
mod explorer;
use explorer::SolarExplorer;

orrery_web::export_explorer!(SolarExplorer, "solar-explorer");
