//! Product link validation and the (simulated) start-tracking request.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;
use yew::functional::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Amazon,
    Flipkart,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
        }
    }
}

// amzn. covers the amzn.to / amzn.in share links.
const HOST_MARKERS: &[(&str, Platform)] = &[
    ("amazon.", Platform::Amazon),
    ("flipkart.", Platform::Flipkart),
    ("amzn.", Platform::Amazon),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("Please enter a valid Amazon or Flipkart product URL")]
    UnsupportedUrl,
    // only a real backend call can produce this
    #[allow(dead_code)]
    #[error("Failed to start price tracking. Please try again.")]
    Failed,
}

impl TrackError {
    pub fn title(&self) -> &'static str {
        match self {
            TrackError::UnsupportedUrl => "Invalid URL",
            TrackError::Failed => "Error",
        }
    }
}

/// Substring check against the supported marketplaces. Case-sensitive and
/// applied to the text exactly as entered.
pub fn validate_product_url(url: &str) -> Result<Platform, TrackError> {
    HOST_MARKERS
        .iter()
        .find(|(marker, _)| url.contains(marker))
        .map(|(_, platform)| *platform)
        .ok_or(TrackError::UnsupportedUrl)
}

/// Starts tracking `url`. There is no backend yet, so this only waits.
pub async fn start_tracking(url: String, platform: Platform) -> Result<(), TrackError> {
    info!("Starting price tracking for {} product: {}", platform.name(), url);
    TimeoutFuture::new(config::SIMULATED_TRACKING_DELAY_MS).await;
    Ok(())
}

/// Local state of the link input form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackForm {
    url: String,
    is_loading: bool,
}

pub enum TrackFormAction {
    Edit(String),
    Begin,
    Finish(Result<(), TrackError>),
}

/// What pressing "Track Price" should do with the current form.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    Ignored,
    Rejected(TrackError),
    Start { url: String, platform: Platform },
}

impl TrackForm {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.url.trim().is_empty()
    }

    pub fn submission(&self) -> Submission {
        if !self.can_submit() {
            return Submission::Ignored;
        }
        match validate_product_url(&self.url) {
            Ok(platform) => Submission::Start {
                url: self.url.clone(),
                platform,
            },
            Err(err) => Submission::Rejected(err),
        }
    }

    pub fn apply(&mut self, action: TrackFormAction) {
        match action {
            TrackFormAction::Edit(url) => {
                // the input is disabled while a request is in flight
                if !self.is_loading {
                    self.url = url;
                }
            }
            TrackFormAction::Begin => self.is_loading = true,
            TrackFormAction::Finish(result) => {
                self.is_loading = false;
                if result.is_ok() {
                    self.url.clear();
                }
            }
        }
    }
}

impl Reducible for TrackForm {
    type Action = TrackFormAction;

    fn reduce(self: Rc<Self>, action: TrackFormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(url: &str) -> TrackForm {
        let mut form = TrackForm::default();
        form.apply(TrackFormAction::Edit(url.to_string()));
        form
    }

    #[test]
    fn test_supported_links() {
        for (url, expected) in [
            ("https://www.amazon.in/dp/B0CHX1W1XY", Platform::Amazon),
            ("https://amazon.com/gp/product/123", Platform::Amazon),
            ("https://amzn.to/3xyz", Platform::Amazon),
            ("https://www.flipkart.com/item/p/itm123", Platform::Flipkart),
            ("not even a url but amazon.de", Platform::Amazon),
        ] {
            assert_eq!(validate_product_url(url), Ok(expected), "{url}");
        }
    }

    #[test]
    fn test_unsupported_links() {
        for url in [
            "https://www.ebay.com/itm/1",
            "amazon",
            "https://AMAZON.com/dp/1",
            "flipkart dot com",
            "https://myntra.com",
        ] {
            assert_eq!(validate_product_url(url), Err(TrackError::UnsupportedUrl), "{url}");
        }
    }

    #[test]
    fn test_blank_input_is_ignored() {
        assert_eq!(TrackForm::default().submission(), Submission::Ignored);
        assert_eq!(form_with("   \t").submission(), Submission::Ignored);
        assert!(!form_with("  ").can_submit());
    }

    #[test]
    fn test_rejected_link_keeps_input() {
        let form = form_with("https://ebay.com/x");
        let submission = form.submission();
        assert_eq!(submission, Submission::Rejected(TrackError::UnsupportedUrl));
        assert_eq!(form.url(), "https://ebay.com/x");
        assert!(!form.is_loading());
    }

    #[test]
    fn test_successful_tracking_clears_input() {
        let mut form = form_with("https://amzn.to/abc");
        assert_eq!(
            form.submission(),
            Submission::Start {
                url: "https://amzn.to/abc".to_string(),
                platform: Platform::Amazon
            }
        );

        form.apply(TrackFormAction::Begin);
        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert_eq!(form.submission(), Submission::Ignored);

        form.apply(TrackFormAction::Finish(Ok(())));
        assert!(!form.is_loading());
        assert_eq!(form.url(), "");
    }

    #[test]
    fn test_failed_tracking_keeps_input() {
        let mut form = form_with("https://www.flipkart.com/p");
        form.apply(TrackFormAction::Begin);
        form.apply(TrackFormAction::Finish(Err(TrackError::Failed)));
        assert!(!form.is_loading());
        assert_eq!(form.url(), "https://www.flipkart.com/p");
    }

    #[test]
    fn test_edits_are_ignored_while_loading() {
        let mut form = form_with("https://amazon.in/x");
        form.apply(TrackFormAction::Begin);
        form.apply(TrackFormAction::Edit("changed".to_string()));
        assert_eq!(form.url(), "https://amazon.in/x");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TrackError::UnsupportedUrl.title(), "Invalid URL");
        assert_eq!(
            TrackError::UnsupportedUrl.to_string(),
            "Please enter a valid Amazon or Flipkart product URL"
        );
        assert_eq!(TrackError::Failed.title(), "Error");
    }
}
