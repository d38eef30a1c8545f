#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

use wasm_bindgen::prelude::*;

use donut_chart::data_gen::generate_chart_data;
use donut_chart::render::{ChartRenderer, DEFAULT_CUTOUT_RADIUS};
use donut_chart::sector::sort_by_share_descending;

use crate::svg_surface::SvgSurface;
use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;

pub mod svg_surface;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;


const CHART_ELEMENT_ID: &str = "chart";

// Entry point. Finds the host `<svg>` element, draws the first chart and regenerates it
// on every click. One click is one synchronous render pass; nothing else is reactive.
#[wasm_bindgen]
pub fn init_page() -> JsResult<()> {
    let chart = web_document().get_existing_element_by_id(CHART_ELEMENT_ID)?;
    let rect = chart.get_bounding_client_rect();
    let renderer =
        ChartRenderer::new(rect.width() / 2.0, rect.height() / 2.0, DEFAULT_CUTOUT_RADIUS);
    render_once(&renderer, &chart)?;
    let listener_chart = chart.clone();
    chart.add_event_listener_and_forget("click", move |_: web_sys::Event| {
        render_once(&renderer, &listener_chart)
    })?;
    Ok(())
}

fn render_once(renderer: &ChartRenderer, chart: &web_sys::Element) -> JsResult<()> {
    let mut sectors = generate_chart_data(&mut rand::rng());
    sort_by_share_descending(&mut sectors);
    let mut surface = SvgSurface::new(chart.clone());
    renderer.draw_chart(&mut surface, &mut sectors, &mut rand::rng())
}
