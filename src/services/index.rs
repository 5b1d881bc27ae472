use std::time::Duration;

pub trait PackageIndex {
    /// Whether a package with exactly this name is published.
    /// Any lookup failure answers `false`.
    fn exists(&mut self, package: &str) -> bool;
}

pub fn package_url(template: &str, package: &str) -> String {
    template.replace("{name}", package)
}

pub struct PypiIndex {
    client: Option<reqwest::blocking::Client>,
    url_template: String,
}

impl PypiIndex {
    pub fn new(url_template: &str, timeout_ms: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| log::warn!("package index client unavailable: {}", e))
            .ok();
        Self {
            client,
            url_template: url_template.to_string(),
        }
    }
}

impl PackageIndex for PypiIndex {
    fn exists(&mut self, package: &str) -> bool {
        let Some(client) = &self.client else {
            return false;
        };
        let url = package_url(&self.url_template, package);
        match client.get(&url).send() {
            Ok(resp) => resp.status() == reqwest::StatusCode::OK,
            Err(e) => {
                log::debug!("index lookup {} failed: {}", url, e);
                false
            }
        }
    }
}
