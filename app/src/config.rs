//! Carries [`StyleThresholds`] from the server-rendered page to the hydrating client.
//!
//! The worker embeds the thresholds as a JSON `<script>` element in the document head;
//! the client reads it back before hydrating so both sides classify the same way.

use crate::{error::CounterError, style::StyleThresholds};

pub const CONFIG_ELEMENT_ID: &str = "counter-config";

pub fn config_script(thresholds: &StyleThresholds) -> Result<String, CounterError> {
    let json = serde_json::to_string(thresholds)?;
    Ok(format!(
        r#"<script id="{CONFIG_ELEMENT_ID}" type="application/json">{json}</script>"#
    ))
}

pub fn thresholds_from_json(json: &str) -> Result<StyleThresholds, CounterError> {
    Ok(serde_json::from_str(json)?)
}
