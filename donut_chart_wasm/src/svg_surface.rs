use wasm_bindgen::JsValue;

use donut_chart::palette::Color;
use donut_chart::render::ChartSurface;

use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;


// Backs the renderer with a live SVG element: every fill becomes a child node, so draw
// order is document order and the cutout drawn last ends up on top.
pub struct SvgSurface {
    root: web_sys::Element,
}

impl SvgSurface {
    pub fn new(root: web_sys::Element) -> Self { SvgSurface { root } }

    pub fn root(&self) -> &web_sys::Element { &self.root }
}

impl ChartSurface for SvgSurface {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        self.root.remove_all_children();
        Ok(())
    }

    fn fill_path(&mut self, path_data: &str, fill: Color) -> Result<(), JsValue> {
        let node = web_document()
            .create_svg_element("path")?
            .with_attribute("d", path_data)?
            .with_attribute("fill", &fill.to_string())?;
        self.root.append_element(node)
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, fill: Color) -> Result<(), JsValue> {
        let node = web_document()
            .create_svg_element("circle")?
            .with_attribute("cx", &cx.to_string())?
            .with_attribute("cy", &cy.to_string())?
            .with_attribute("r", &radius.to_string())?
            .with_attribute("fill", &fill.to_string())?;
        self.root.append_element(node)
    }
}
