//! Site and navigation configuration, as shared by every planner page

use std::error::Error;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

fn is_false(value: &bool) -> bool {
    *value == false
}

/// General information about the site
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: Url,
    pub links: SiteLinks,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteLinks {
    pub github: Url,
}

impl SiteConfig {
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        read_json(path)
    }
}

/// A link of a navigation bar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

pub type MainNavItem = NavItem;

/// An entry of a sidebar: either a single link, or a group of links
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SidebarNavItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Whether the link leaves the site
    #[serde(default, skip_serializing_if = "is_false")]
    pub external: bool,
    /// Name of the icon shown next to the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub target: SidebarTarget,
}

/// A group must have items, and may have a link of its own. A link must not have items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarTarget {
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        items: Vec<NavItem>,
    },
    Link {
        href: String,
    },
}

impl SidebarNavItem {
    /// The link of this entry, if it has one
    pub fn href(&self) -> Option<&str> {
        match &self.target {
            SidebarTarget::Link{ href } => Some(href.as_str()),
            SidebarTarget::Group{ href, .. } => href.as_deref(),
        }
    }

    /// The links nested in this entry (none for a single link)
    pub fn items(&self) -> &[NavItem] {
        match &self.target {
            SidebarTarget::Link{ .. } => &[],
            SidebarTarget::Group{ items, .. } => items.as_slice(),
        }
    }
}

/// Navigation of the planner pages
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    pub main_nav: Vec<MainNavItem>,
}

impl PlannerConfig {
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        read_json(path)
    }

    /// The items of the main navigation that can be clicked
    pub fn enabled_items(&self) -> impl Iterator<Item = &MainNavItem> {
        self.main_nav.iter().filter(|item| item.disabled == false)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    match std::fs::File::open(path) {
        Err(err) => {
            Err(format!("Unable to open file {:?}: {}", path, err).into())
        },
        Ok(file) => Ok(serde_json::from_reader(file)?),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sidebar_items() {
        let json = r#"[
            {"title": "Docs", "href": "/docs", "icon": "page"},
            {"title": "Planner", "items": [{"title": "Events", "href": "/events"}]},
            {"title": "Source", "href": "/src", "external": true, "items": [{"title": "Tags", "href": "/tags", "disabled": true}]}
        ]"#;
        let items: Vec<SidebarNavItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0].target, SidebarTarget::Link{ href: "/docs".to_string() });
        assert_eq!(items[0].icon.as_deref(), Some("page"));
        assert!(items[0].items().is_empty());

        assert_eq!(items[1].href(), None);
        assert_eq!(items[1].items()[0].title, "Events");

        assert!(items[2].external);
        assert_eq!(items[2].href(), Some("/src"));
        assert!(items[2].items()[0].disabled);
    }

    #[test]
    fn sidebar_item_needs_a_target() {
        let json = r#"{"title": "Nowhere"}"#;
        assert!(serde_json::from_str::<SidebarNavItem>(json).is_err());
    }

    #[test]
    fn planner_config() {
        let json = r#"{"mainNav": [
            {"title": "Übersicht", "href": "/"},
            {"title": "Archiv", "href": "/archive", "disabled": true}
        ]}"#;
        let config: PlannerConfig = serde_json::from_str(json).unwrap();
        let enabled: Vec<&str> = config.enabled_items().map(|item| item.title.as_str()).collect();
        assert_eq!(enabled, vec!["Übersicht"]);

        let written = serde_json::to_value(&config).unwrap();
        assert_eq!(written["mainNav"][0], serde_json::json!({"title": "Übersicht", "href": "/"}));
    }

    #[test]
    fn site_config_from_file() {
        let path = std::env::temp_dir().join(format!("planner-edit-site-{}.json", std::process::id()));
        std::fs::write(&path, r#"{
            "name": "Planner",
            "description": "Plan courses",
            "url": "https://planner.example.com",
            "links": {"github": "https://github.com/example/planner"}
        }"#).unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.name, "Planner");
        assert_eq!(config.links.github.host_str(), Some("github.com"));

        std::fs::remove_file(&path).unwrap();
        assert!(SiteConfig::from_file(&path).is_err());
    }
}
