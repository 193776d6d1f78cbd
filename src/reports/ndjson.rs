use crate::Result;
use crate::scoring::ScoreRecord;
use serde_json::json;

/// Serialize one score record as a single JSON line.
///
/// Fields: `URL`, `NetScore`, `NetScore_Latency`, plus one score field and
/// one latency field per metric, named after the metric. Numbers are rounded
/// to 3 decimals at serialization only; the in-memory record keeps full
/// precision.
#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate(record: &ScoreRecord) -> Result<String> {
    let mut obj = serde_json::Map::new();
    obj.insert("URL".to_string(), json!(record.url));
    obj.insert("NetScore".to_string(), json!(round3(record.net_score)));
    obj.insert("NetScore_Latency".to_string(), json!(round3(record.net_latency)));

    for (metric, result) in &record.metrics {
        obj.insert(metric.name().to_string(), json!(round3(result.score)));
        obj.insert(format!("{}_Latency", metric.name()), json!(round3(result.latency)));
    }

    Ok(serde_json::to_string(&serde_json::Value::Object(obj))?)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ALL_METRICS, MetricResult};
    use crate::scoring::aggregate;

    fn test_record() -> ScoreRecord {
        let metrics = ALL_METRICS
            .into_iter()
            .zip([0.5, 0.7, 0.3, 0.4, 1.0])
            .map(|(m, score)| (m, MetricResult { score, latency: 0.25 }))
            .collect();
        aggregate("https://github.com/owner/repo", metrics)
    }

    #[test]
    fn test_round3() {
        assert!((round3(0.528_571_4) - 0.529).abs() < f64::EPSILON);
        assert!((round3(1.0) - 1.0).abs() < f64::EPSILON);
        assert!(round3(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generate_is_one_line() {
        let line = generate(&test_record()).unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_generate_contains_all_fields() {
        let line = generate(&test_record()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["URL"], "https://github.com/owner/repo");
        for name in ["RampUp", "Correctness", "BusFactor", "ResponsiveMaintainer", "License", "NetScore"] {
            assert!(parsed[name].is_number(), "missing score field {name}");
            assert!(parsed[&format!("{name}_Latency")].is_number(), "missing latency field {name}");
        }
    }

    #[test]
    fn test_generate_field_values() {
        let line = generate(&test_record()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert!((parsed["RampUp"].as_f64().unwrap() - 0.5).abs() < f64::EPSILON);
        assert!((parsed["License"].as_f64().unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((parsed["NetScore"].as_f64().unwrap() - 0.529).abs() < f64::EPSILON);
        assert!((parsed["NetScore_Latency"].as_f64().unwrap() - 1.25).abs() < f64::EPSILON);
    }
}
