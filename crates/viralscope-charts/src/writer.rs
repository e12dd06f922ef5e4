use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use viralscope_analyzer::series::{CATEGORIES_SERIES, DURATION_SERIES, MUSIC_SERIES, TAGS_SERIES};
use viralscope_analyzer::{ChartSeries, ChartSink};

use crate::error::ChartError;
use crate::figure::figure_json;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Output file name for a series key.
#[must_use]
pub fn file_name_for(name: &str) -> String {
    match name {
        DURATION_SERIES => "duration_distribution.html".to_string(),
        TAGS_SERIES => "top_tags.html".to_string(),
        MUSIC_SERIES => "top_music.html".to_string(),
        CATEGORIES_SERIES => "category_distribution.html".to_string(),
        other => format!("{other}.html"),
    }
}

/// Writes each chart series to `<output_dir>/<file>.html`.
#[derive(Debug, Clone)]
pub struct ChartWriter {
    output_dir: PathBuf,
}

impl ChartWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_one(&self, name: &str, series: &ChartSeries) -> Result<PathBuf, ChartError> {
        if series.labels.len() != series.values.len() {
            return Err(ChartError::MismatchedSeries {
                name: name.to_string(),
                labels: series.labels.len(),
                values: series.values.len(),
            });
        }

        let path = self.output_dir.join(file_name_for(name));
        let page = html_page(&series.title, &serde_json::to_string(&figure_json(series))?);
        fs::write(&path, page).map_err(|source| ChartError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(series = name, path = %path.display(), "wrote chart");
        Ok(path)
    }
}

impl ChartSink for ChartWriter {
    type Error = ChartError;

    fn render_all(
        &self,
        series: &BTreeMap<String, ChartSeries>,
    ) -> Result<BTreeMap<String, PathBuf>, ChartError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ChartError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut written = BTreeMap::new();
        for (name, one) in series {
            let path = self.write_one(name, one)?;
            written.insert(name.clone(), path);
        }

        tracing::info!(
            charts = written.len(),
            dir = %self.output_dir.display(),
            "charts written"
        );
        Ok(written)
    }
}

fn html_page(title: &str, figure: &str) -> String {
    // A literal "</" inside the embedded JSON would close the script element.
    let figure = figure.replace("</", "<\\/");
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"chart\" style=\"width:100%;height:600px;\"></div>\n\
         <script>\n\
         const figure = {figure};\n\
         Plotly.newPlot(\"chart\", figure.data, figure.layout, {{responsive: true}});\n\
         </script>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
