//! Response reduction.
//!
//! Collapses the backend's time-series responses into a flat
//! [`ReducedMetrics`] map and detects the "no data" condition. The reduction
//! rule is uniform and intentionally lossy: the window is configured to
//! return a single aggregate point, so only `series[0].1` is kept. Extra
//! points are never averaged or disambiguated.

use crate::models::{MetricSeries, ReducedMetrics};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The website metric whose emptiness is the authoritative "entity does not
/// exist" signal.
///
/// Website queries filter on a tag, and the backend answers a filter that
/// matches nothing with fixed zero-valued series for most metrics. Response
/// time is the exception: it comes back as a literal empty series. That
/// convention is undocumented and backend-specific, so it lives in exactly
/// one place here.
pub const AUTHORITATIVE_WEBSITE_METRIC: &str = "responseTime.p90";

/// Application and service responses nest the series under `items`.
#[derive(Debug, Deserialize)]
struct ItemsResponse {
    items: Vec<ItemPage>,
}

#[derive(Debug, Deserialize)]
struct ItemPage {
    metrics: BTreeMap<String, MetricSeries>,
}

/// Website responses carry the series at the top level.
#[derive(Debug, Deserialize)]
struct WebsiteResponse {
    metrics: BTreeMap<String, MetricSeries>,
}

/// Reduces an application or service response.
///
/// The series live at `items[0].metrics`. An empty `items` list is the
/// governing "no data" signal and yields `Ok(None)`; otherwise every series
/// reduces to the value of its first point.
///
/// # Errors
///
/// Returns the deserialization error when the body does not match the
/// documented response shape.
pub fn reduce_item_metrics(
    raw: serde_json::Value,
) -> Result<Option<ReducedMetrics>, serde_json::Error> {
    let response: ItemsResponse = serde_json::from_value(raw)?;

    let Some(page) = response.items.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(reduce_series(page.metrics)))
}

/// Reduces a website response.
///
/// Website responses always carry a `metrics` object, so absence is decided
/// by the [`AUTHORITATIVE_WEBSITE_METRIC`]: if its series is empty the whole
/// call yields `Ok(None)`. Otherwise all non-empty series reduce normally;
/// an unexpectedly empty non-authoritative series is skipped, never
/// zero-filled.
///
/// # Errors
///
/// Returns the deserialization error when the body does not match the
/// documented response shape.
pub fn reduce_website_metrics(
    raw: serde_json::Value,
) -> Result<Option<ReducedMetrics>, serde_json::Error> {
    let response: WebsiteResponse = serde_json::from_value(raw)?;

    let authoritative_is_empty = response
        .metrics
        .get(AUTHORITATIVE_WEBSITE_METRIC)
        .is_none_or(Vec::is_empty);
    if authoritative_is_empty {
        return Ok(None);
    }

    Ok(Some(reduce_series(response.metrics)))
}

/// Applies the reduction rule to every series: keep the value of the first
/// point, skip empty series.
fn reduce_series(series: BTreeMap<String, MetricSeries>) -> ReducedMetrics {
    series
        .into_iter()
        .filter_map(|(key, points)| points.first().map(|&(_, value)| (key, value)))
        .collect()
}
