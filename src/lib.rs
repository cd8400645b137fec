pub mod contact;
pub mod cursor;
pub mod viewer;

use serde::{Deserialize, Serialize};

/// Identifies one of the scrollable page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Portfolio,
    About,
    Contact,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Portfolio,
        SectionId::About,
        SectionId::Contact,
    ];
}

/// All copy and asset references for the studio page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// Studio name shown in the window title and header (e.g., "Flik")
    pub studio_name: String,
    /// Where the studio is based (e.g., "India")
    pub location: String,
    /// Social follower count, preformatted (e.g., "250K")
    pub followers: String,
    /// Social handle shown under the follower count
    pub handle: String,
    /// Embedded asset path of the panorama used by the virtual tour
    pub panorama_path: String,
    /// Entries of the floating section navigation bar
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub portfolio: Portfolio,
    pub about: About,
    pub contact: Contact,
}

/// A single navigation bar entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Section this entry scrolls to
    pub id: SectionId,
    /// Button label
    pub label: String,
}

/// Landing section with the virtual tour call to action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub body: String,
    /// Label of the button that opens the panorama viewer
    pub cta: String,
}

/// Project gallery section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub heading: String,
    pub subheading: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A gallery card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub location: String,
    /// RGB accent used for the card artwork
    pub accent: [u8; 3],
}

/// Studio description with feature cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub cards: Vec<FeatureCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard {
    pub title: String,
    pub body: String,
}

/// Contact form section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub heading: String,
    /// Recipient of messages sent from the contact form
    pub email: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            studio_name: "Flik".to_owned(),
            location: String::new(),
            followers: String::new(),
            handle: String::new(),
            panorama_path: "panorama.png".to_owned(),
            nav: vec![
                NavItem {
                    id: SectionId::Home,
                    label: "Home".to_owned(),
                },
                NavItem {
                    id: SectionId::Portfolio,
                    label: "Portfolio".to_owned(),
                },
                NavItem {
                    id: SectionId::About,
                    label: "About".to_owned(),
                },
                NavItem {
                    id: SectionId::Contact,
                    label: "Contact".to_owned(),
                },
            ],
            hero: Hero {
                cta: "Enter VR Experience".to_owned(),
                ..Default::default()
            },
            portfolio: Portfolio::default(),
            about: About::default(),
            contact: Contact::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_navigates_every_section() {
        let content = SiteContent::default();
        let ids: Vec<_> = content.nav.iter().map(|item| item.id).collect();
        assert_eq!(ids, SectionId::ALL);
    }

    #[test]
    fn section_ids_use_lowercase_names() {
        let item: NavItem = ron::from_str(r#"(id: portfolio, label: "Work")"#).unwrap();
        assert_eq!(item.id, SectionId::Portfolio);
        assert_eq!(item.label, "Work");
    }
}
