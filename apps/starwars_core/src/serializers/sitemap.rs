use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub method: String,
    pub path: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sitemap {
    pub routes: Vec<RouteEntry>,
}
