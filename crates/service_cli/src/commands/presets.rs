//! Presets command implementation

use pricer_risk::scenarios::StressPreset;
use serde_json::{json, Value};

use crate::Result;

/// Run the presets command
pub fn run() -> Result<Value> {
    let presets = StressPreset::catalog()
        .iter()
        .map(|preset| {
            Ok(json!({
                "preset_id": preset.preset_id,
                "label": preset.label,
                "shocks": preset.shocks,
                "preset_hash": preset.hash()?,
            }))
        })
        .collect::<Result<Vec<Value>>>()?;

    Ok(json!({ "presets": presets }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_listing() {
        let report = run().unwrap();
        let presets = report["presets"].as_array().unwrap();
        assert_eq!(presets.len(), 9);
        assert_eq!(presets[0]["preset_id"], "rates_up_100bp");
        assert_eq!(presets[0]["preset_hash"].as_str().unwrap().len(), 64);
        assert_eq!(run().unwrap(), report);
    }
}
