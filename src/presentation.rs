use crate::models::{SocialLinks, Supporter, TeamMember};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    LinkedIn,
    Twitter,
    Youtube,
    Instagram,
    Quora,
}

impl SocialNetwork {
    /// Display order of the icon row.
    pub const ALL: [SocialNetwork; 6] = [
        SocialNetwork::Facebook,
        SocialNetwork::LinkedIn,
        SocialNetwork::Twitter,
        SocialNetwork::Youtube,
        SocialNetwork::Instagram,
        SocialNetwork::Quora,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Youtube => "YouTube",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Quora => "Quora",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "icon-facebook-square",
            SocialNetwork::LinkedIn => "icon-linkedin",
            SocialNetwork::Twitter => "icon-twitter",
            SocialNetwork::Youtube => "icon-youtube",
            SocialNetwork::Instagram => "icon-instagram",
            SocialNetwork::Quora => "icon-quora",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialIcon {
    pub network: SocialNetwork,
    pub href: String,
}

impl SocialLinks {
    pub fn url(&self, network: SocialNetwork) -> Option<&str> {
        let url = match network {
            SocialNetwork::Facebook => &self.facebook,
            SocialNetwork::LinkedIn => &self.linkedin,
            SocialNetwork::Twitter => &self.twitter,
            SocialNetwork::Youtube => &self.youtube,
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::Quora => &self.quora,
        };
        url.as_deref().filter(|href| !href.trim().is_empty())
    }
}

/// Icons for the links a member actually has, in fixed order.
pub fn team_social_icons(member: &TeamMember) -> Vec<SocialIcon> {
    SocialNetwork::ALL
        .iter()
        .filter_map(|network| {
            member.social_links.url(*network).map(|href| SocialIcon {
                network: *network,
                href: href.to_string(),
            })
        })
        .collect()
}

/// Attributes of a supporter logo tile: one image wrapped in an outbound link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupporterCard {
    pub href: String,
    pub target: &'static str,
    pub image_src: String,
    pub image_alt: String,
    pub aos: Option<String>,
}

impl From<&Supporter> for SupporterCard {
    fn from(supporter: &Supporter) -> Self {
        Self {
            href: supporter.link.clone(),
            target: "_blank",
            image_src: supporter.src.clone(),
            image_alt: supporter.alt.clone(),
            aos: supporter.aos.clone(),
        }
    }
}
