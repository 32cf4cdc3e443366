//! Single-instance GeoJSON result panel.

#[cfg(test)]
#[path = "geojson_test.rs"]
mod geojson_test;

use protocol::Download;
use serde_json::Value;

/// DOM id of the panel; at most one element carries it.
pub const PANEL_ID: &str = "geojsonContainer";
pub const PANEL_TITLE: &str = "GeoJSON Output";
pub const DOWNLOAD_LABEL: &str = "Download";

#[derive(Clone, Debug, PartialEq)]
pub struct GeoJsonPanel {
    document: Value,
    pretty: String,
    revision: u64,
}

impl GeoJsonPanel {
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Document text as shown in the panel body (2-space indent).
    #[must_use]
    pub fn pretty(&self) -> &str {
        &self.pretty
    }

    /// Render counter; changes whenever the panel is replaced.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Artifact produced by the panel's download control.
    #[must_use]
    pub fn download(&self) -> Download {
        Download::geojson(self.pretty.clone())
    }
}

/// Owner of the panel slot. Rendering always discards the previous panel.
#[derive(Clone, Debug, Default)]
pub struct GeoJsonViewer {
    panel: Option<GeoJsonPanel>,
    renders: u64,
}

impl GeoJsonViewer {
    pub fn render(&mut self, document: Value) -> &GeoJsonPanel {
        self.panel = None;
        self.renders = self.renders.wrapping_add(1);
        let pretty = protocol::pretty_json(&document);
        self.panel.insert(GeoJsonPanel {
            document,
            pretty,
            revision: self.renders,
        })
    }

    #[must_use]
    pub fn panel(&self) -> Option<&GeoJsonPanel> {
        self.panel.as_ref()
    }
}
