use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub charts_path: Option<String>,
    pub no_charts: Option<bool>,
    pub chart_width: Option<u32>,
    pub chart_height: Option<u32>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
