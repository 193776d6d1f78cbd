//! Weighted aggregation of metric results into one score per URL.
//!
//! The [`Scorer`] owns the resolver and the hosting client, runs every
//! metric evaluator concurrently against one resolved URL, and combines
//! their scores into a [`ScoreRecord`]: the weighted mean of all metric
//! scores plus the sum of all metric latencies. Evaluators are logically
//! independent; any subset of them degrading to its fallback leaves the
//! others untouched.

use crate::Result;
use crate::hosting::{Client, RepoSpec};
use crate::metrics::{ALL_METRICS, Metric, MetricResult};
use crate::resolve::Resolver;
use core::time::Duration;
use futures_util::future::join_all;
use url::Url;

const LOG_TARGET: &str = "   scoring";

/// Default base URL of the source-hosting API
const DEFAULT_HOSTING_API_URL: &str = "https://api.github.com";

/// The aggregate output for one input URL.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    /// The original input URL
    pub url: String,
    /// Per-metric results, in metric output order
    pub metrics: Vec<(Metric, MetricResult)>,
    /// Weighted mean of all metric scores, in [0,1]
    pub net_score: f64,
    /// Sum of all metric latencies, in seconds
    pub net_latency: f64,
}

/// Scores one URL at a time: resolve, evaluate all metrics, aggregate.
#[derive(Debug, Clone)]
pub struct Scorer {
    client: Client,
    resolver: Resolver,
}

impl Scorer {
    /// Create a scorer.
    ///
    /// `hosting_api_url` and `registry_url` override the real endpoints,
    /// which keeps the whole pipeline testable against mock servers.
    pub fn new(
        github_token: &str,
        hosting_api_url: Option<&str>,
        registry_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::new(github_token, hosting_api_url.unwrap_or(DEFAULT_HOSTING_API_URL), timeout)?;
        let resolver = Resolver::new(registry_url, timeout)?;

        Ok(Self { client, resolver })
    }

    /// Compute the full score record for one validated URL.
    ///
    /// `original` is the input text exactly as it was given; the output
    /// record carries it verbatim, not the parsed URL's normalized form.
    pub async fn score(&self, url: &Url, original: &str) -> ScoreRecord {
        let resolved = self.resolver.resolve(url).await;

        // Only the resolved form is passed to the evaluators. A resolved URL
        // that is not owner/repo shaped still gets a record, with every
        // metric at its fallback score.
        let repo = match RepoSpec::parse(&resolved) {
            Ok(spec) => Some(spec),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "'{resolved}' does not identify a repository: {e:#}");
                None
            }
        };

        let results = join_all(ALL_METRICS.iter().map(|m| m.evaluate(&self.client, repo.as_ref()))).await;
        let metrics: Vec<(Metric, MetricResult)> = ALL_METRICS.into_iter().zip(results).collect();

        aggregate(original, metrics)
    }
}

/// Combine per-metric results: `NetScore` is the weighted mean of all scores,
/// `NetScore_Latency` the sum of all latencies. The denominator is the sum of
/// the fixed metric weights and is always positive.
#[must_use]
pub fn aggregate(url: &str, metrics: Vec<(Metric, MetricResult)>) -> ScoreRecord {
    let mut weighted_score_sum = 0.0;
    let mut total_weight = 0u32;
    let mut net_latency = 0.0;

    for (metric, result) in &metrics {
        weighted_score_sum += result.score * f64::from(metric.weight());
        total_weight += metric.weight();
        net_latency += result.latency;
    }

    ScoreRecord {
        url: url.to_string(),
        metrics,
        net_score: weighted_score_sum / f64::from(total_weight),
        net_latency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn record_for(scores: [f64; 5]) -> ScoreRecord {
        let metrics = ALL_METRICS
            .into_iter()
            .zip(scores)
            .map(|(m, score)| (m, MetricResult { score, latency: 0.1 }))
            .collect();
        aggregate("https://github.com/owner/repo", metrics)
    }

    #[test]
    fn test_aggregate_weighted_mean_is_exact() {
        // Scores [0.5, 0.7, 0.3, 0.4, 1.0] with weights [1, 1, 1, 3, 1]
        let record = record_for([0.5, 0.7, 0.3, 0.4, 1.0]);

        let expected = (0.5 + 0.7 + 0.3 + 3.0 * 0.4 + 1.0) / 7.0;
        assert!((record.net_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_net_latency_is_sum() {
        let record = record_for([0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((record.net_latency - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_all_ones_is_one() {
        let record = record_for([1.0; 5]);
        assert!((record.net_score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_stays_in_bounds() {
        let record = record_for([0.0, 1.0, 0.0, 1.0, 0.0]);
        assert!((0.0..=1.0).contains(&record.net_score));
    }

    #[test]
    fn test_aggregate_keeps_original_url() {
        let record = record_for([0.0; 5]);
        assert_eq!(record.url, "https://github.com/owner/repo");
    }

    #[tokio::test]
    async fn test_score_degraded_subset_leaves_others_intact() {
        let server = MockServer::start().await;
        // License succeeds; everything else fails
        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/license"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let scorer = Scorer::new("token", Some(&server.uri()), Some(&server.uri()), TIMEOUT).unwrap();
        let url = Url::parse("https://github.com/owner/repo").unwrap();
        let record = scorer.score(&url, url.as_str()).await;

        let license = record.metrics.iter().find(|(m, _)| *m == Metric::License).unwrap();
        assert!((license.1.score - 1.0).abs() < f64::EPSILON);

        // Weighted mean: only License (weight 1) contributes out of 7
        assert!((record.net_score - 1.0 / 7.0).abs() < 1e-12);
        assert!(record.net_latency >= 0.0);
    }

    #[tokio::test]
    async fn test_score_unresolvable_url_yields_fallback_record() {
        let scorer = Scorer::new("token", Some("http://127.0.0.1:1"), Some("http://127.0.0.1:1"), TIMEOUT).unwrap();

        // Valid URL, but not owner/repo shaped after (identity) resolution
        let url = Url::parse("https://example.com/").unwrap();
        let record = scorer.score(&url, url.as_str()).await;

        assert!(record.net_score.abs() < f64::EPSILON);
        assert_eq!(record.metrics.len(), 5);
    }

    #[tokio::test]
    async fn test_score_reports_the_input_text_verbatim() {
        let scorer = Scorer::new("token", Some("http://127.0.0.1:1"), Some("http://127.0.0.1:1"), TIMEOUT).unwrap();

        // Parsing lowercases the host and appends a slash; the record must
        // carry the line as it was given, not the normalized form
        let original = "https://GitHub.com";
        let url = Url::parse(original).unwrap();
        assert_ne!(url.as_str(), original);

        let record = scorer.score(&url, original).await;
        assert_eq!(record.url, original);
    }
}
