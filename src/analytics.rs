//! Analytics event dispatch.
//!
//! DESIGN
//! ======
//! The shop reports the same event to several trackers at once; here each
//! tracker is an [`AnalyticsSink`] and [`Analytics`] fans every event out to
//! all of them. Sinks are registered by the embedding layer (a tag-manager
//! bridge, a log sink, a test double); the dispatcher neither knows nor
//! cares what is behind them. Dispatch also emits a `tracing` debug line,
//! the successor of the original's console echo.

use serde_json::Value;

/// A named event with arbitrary JSON parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: Value,
}

/// Destination for analytics events. Implementations must not fail dispatch.
pub trait AnalyticsSink {
    fn record(&mut self, event: &AnalyticsEvent);
}

/// Fan-out dispatcher over registered sinks.
#[derive(Default)]
pub struct Analytics {
    sinks: Vec<Box<dyn AnalyticsSink>>,
}

impl Analytics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink; every subsequent event reaches it.
    pub fn register(&mut self, sink: Box<dyn AnalyticsSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch `name` with `params` to every sink.
    pub fn track(&mut self, name: &str, params: Value) {
        let event = AnalyticsEvent {
            name: name.to_owned(),
            params,
        };
        tracing::debug!(event = %event.name, "analytics event");
        for sink in &mut self.sinks {
            sink.record(&event);
        }
    }

    /// Page-view event, fired once per navigation.
    pub fn page_view(&mut self, page_path: &str, page_title: &str) {
        self.track(
            "page_view",
            serde_json::json!({
                "page_path": page_path,
                "page_title": page_title,
            }),
        );
    }

    /// Product-link click event.
    pub fn product_click(&mut self, product_name: &str, product_url: &str) {
        self.track(
            "product_click",
            serde_json::json!({
                "product_name": product_name,
                "product_url": product_url,
            }),
        );
    }

    /// Scroll-depth event for a newly reached bucket.
    pub fn scroll_depth(&mut self, depth: u32) {
        self.track("scroll_depth", serde_json::json!({ "depth": depth }));
    }
}

// =============================================================================
// SCROLL DEPTH
// =============================================================================

/// Bucket size for scroll-depth reporting, in percent.
const SCROLL_BUCKET_PERCENT: u32 = 25;

/// Tracks how far down the page the shopper has been, in 25% buckets.
///
/// Each bucket fires at most once per page, starting at 25%.
#[derive(Debug, Default)]
pub struct ScrollDepthTracker {
    max_bucket: u32,
}

impl ScrollDepthTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll sample; returns a newly reached bucket, if any.
    ///
    /// `scroll_y` is the current offset, `page_height` the full document
    /// height, `viewport` the window height.
    pub fn on_scroll(&mut self, scroll_y: f64, page_height: f64, viewport: f64) -> Option<u32> {
        let scrollable = page_height - viewport;
        if scrollable <= 0.0 {
            return None;
        }

        let percent = (scroll_y / scrollable * 100.0).clamp(0.0, 100.0);
        if percent < f64::from(SCROLL_BUCKET_PERCENT) {
            return None;
        }

        let bucket = (percent as u32) / SCROLL_BUCKET_PERCENT * SCROLL_BUCKET_PERCENT;
        if bucket <= self.max_bucket {
            return None;
        }

        self.max_bucket = bucket;
        Some(bucket)
    }
}

#[cfg(test)]
#[path = "analytics_test.rs"]
mod tests;
