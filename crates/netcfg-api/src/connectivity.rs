// Connectivity probe endpoint

use serde_json::Value;

use crate::client::NetcfgClient;
use crate::error::Error;

impl NetcfgClient {
    /// Ask the backend to probe a URL. `None` lets the backend pick its
    /// default target.
    ///
    /// `GET /connectivity[?target=...]`
    pub async fn check_connectivity(&self, target: Option<&str>) -> Result<Value, Error> {
        let mut url = self.api_url(&["connectivity"])?;
        if let Some(target) = target {
            url.query_pairs_mut().append_pair("target", target);
        }
        self.get(url, None).await
    }
}
