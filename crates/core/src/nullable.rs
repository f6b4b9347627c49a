//! Lenient field decoding for records the shop stores with null columns.

use serde::{Deserialize, Deserializer};

/// Decode a field that the shop may send as `null`, falling back to `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use testresult::TestResult;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::or_default")]
        label: String,
    }

    #[test]
    fn null_missing_and_present_values_decode() -> TestResult {
        let rows: Vec<Row> =
            serde_json::from_value(json!([{ "label": null }, {}, { "label": "Pen" }]))?;

        let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();

        assert_eq!(labels, ["", "", "Pen"]);

        Ok(())
    }
}
