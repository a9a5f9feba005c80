//! Topic Preferences
//!
//! The topic catalog rendered by the preferences form, the set of checked
//! topics, and the payload emitted when the form is submitted.

use serde::{Deserialize, Serialize};

use crate::session::User;

/// A selectable news topic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    /// Value carried by the checkbox, e.g. `technology`
    pub id: String,
    /// Text shown next to the checkbox
    pub label: String,
}

impl Topic {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered list of topics offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::new(vec![
            Topic::new("technology", "Technology"),
            Topic::new("health", "Health"),
            Topic::new("business", "Business"),
        ])
    }
}

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// First id that appears more than once, if any
    pub fn first_duplicate(&self) -> Option<&str> {
        self.topics
            .iter()
            .enumerate()
            .find(|(i, t)| self.topics[..*i].iter().any(|prev| prev.id == t.id))
            .map(|(_, t)| t.id.as_str())
    }
}

/// Topics currently checked in the preferences form.
///
/// Membership always mirrors the last change event seen for each topic.
/// Ids are kept in the order they were first checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSelection {
    selected: Vec<String>,
}

impl PreferenceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change event
    pub fn set(&mut self, topic: &str, checked: bool) {
        if checked {
            self.check(topic);
        } else {
            self.uncheck(topic);
        }
        tracing::debug!(topic, checked, selected = ?self.selected, "Preference toggled");
    }

    pub fn check(&mut self, topic: &str) {
        if !self.contains(topic) {
            self.selected.push(topic.to_string());
        }
    }

    pub fn uncheck(&mut self, topic: &str) {
        self.selected.retain(|t| t != topic);
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.selected.iter().any(|t| t == topic)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

/// Body of a preferences submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferencesPayload {
    pub username: Option<String>,
    pub preferences: Vec<String>,
}

impl PreferencesPayload {
    pub fn new(user: Option<&User>, selection: &PreferenceSelection) -> Self {
        Self {
            username: user.map(|u| u.name.clone()),
            preferences: selection.iter().map(str::to_string).collect(),
        }
    }
}

/// Submit the form. Nothing leaves the page: the payload is only traced.
pub fn submit(user: Option<&User>, selection: &PreferenceSelection) -> PreferencesPayload {
    let payload = PreferencesPayload::new(user, selection);
    match serde_json::to_string(&payload) {
        Ok(json) => tracing::info!(payload = %json, "Preferences submitted"),
        Err(e) => tracing::warn!("Failed to encode preferences payload: {}", e),
    }
    payload
}

/// Heading of the preferences form
pub fn heading(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("{}'s Preferences", user.name),
        None => "Set Your Preferences".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_and_uncheck() {
        let mut selection = PreferenceSelection::new();
        selection.set("technology", true);
        selection.set("health", true);

        let ids: Vec<_> = selection.iter().collect();
        assert_eq!(ids, vec!["technology", "health"]);

        selection.set("technology", false);
        let ids: Vec<_> = selection.iter().collect();
        assert_eq!(ids, vec!["health"]);
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut selection = PreferenceSelection::new();
        selection.set("business", true);
        selection.set("business", true);
        assert_eq!(selection.len(), 1);

        selection.set("business", false);
        selection.set("business", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_default_catalog() {
        let catalog = TopicCatalog::default();
        let ids: Vec<_> = catalog.topics().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["technology", "health", "business"]);
        assert_eq!(catalog.topics()[1].label, "Health");
        assert!(catalog.first_duplicate().is_none());
    }

    #[test]
    fn test_duplicate_topic_detected() {
        let catalog = TopicCatalog::new(vec![
            Topic::new("health", "Health"),
            Topic::new("sports", "Sports"),
            Topic::new("health", "Wellbeing"),
        ]);
        assert_eq!(catalog.first_duplicate(), Some("health"));
    }

    #[test]
    fn test_submit_builds_payload() {
        let mut selection = PreferenceSelection::new();
        selection.check("technology");
        selection.check("business");
        let user = User::new("User");

        let payload = submit(Some(&user), &selection);
        assert_eq!(payload.username.as_deref(), Some("User"));
        assert_eq!(payload.preferences, vec!["technology", "business"]);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["preferences"][1], "business");
    }

    #[test]
    fn test_submit_without_user_or_selection() {
        let payload = submit(None, &PreferenceSelection::new());
        assert_eq!(payload.username, None);
        assert!(payload.preferences.is_empty());
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(None), "Set Your Preferences");
        assert_eq!(heading(Some(&User::new("Ada"))), "Ada's Preferences");
    }
}
