//! Site-wide organization, contact, social media and banking details.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub organization: Organization,
    pub contact: Contact,
    pub social: Social,
    pub banking: Banking,
    pub sponsors: &'static [Sponsor],
    pub media: Media,
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: &'static str,
    pub founding_year: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub target_audience: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub address: Address,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: &'static str,
    pub postal_code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub country_code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Social {
    pub instagram: SocialLink,
    pub discord: SocialLink,
    pub linkedin: SocialLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub handle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Discord,
    Linkedin,
}

/// Bank details shown on the donation page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banking {
    pub account_holder: &'static str,
    pub iban: &'static str,
    pub bic: &'static str,
    pub bank: &'static str,
    pub reference: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sponsor {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: Option<&'static str>,
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Media {
    /// Photo credit; `None` until a photographer is credited
    pub photographer: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
}

pub static SITE: SiteConfig = SiteConfig {
    name: "G:URL*s Coding Club",
    short_name: "G:URL*s",
    description: "Coding club for FLINTA* individuals in Vienna, Austria",
    url: "https://gurls.club",

    organization: Organization {
        name: "G:URL*s Coding Club",
        founding_year: "2024",
        kind: "Coding Club",
        target_audience: "FLINTA* community",
    },

    contact: Contact {
        email: "hello@gurls.club",
        address: Address {
            street: "Kreativstraße 12",
            postal_code: "1150",
            city: "Vienna",
            country: "Austria",
            country_code: "AT",
        },
    },

    social: Social {
        instagram: SocialLink {
            name: "Instagram",
            url: "https://instagram.com/gurls.club",
            handle: "@gurls.club",
        },
        discord: SocialLink {
            name: "Discord",
            url: "https://discord.gg/gurls",
            handle: "discord.gg/gurls",
        },
        linkedin: SocialLink {
            name: "LinkedIn",
            url: "https://linkedin.com/company/gurls-club",
            handle: "gurls-club",
        },
    },

    banking: Banking {
        account_holder: "G:URL*S Coding Club",
        iban: "0000 0000 0000 0000 0000",
        bic: "XXXXXX",
        bank: "X Bank AG",
        reference: "Donation G:URL*s",
    },

    sponsors: &[
        Sponsor {
            id: "sponsor-1",
            name: "Sponsor Logo 1",
            logo: None,
            url: None,
        },
        Sponsor {
            id: "sponsor-2",
            name: "Sponsor Logo 2",
            logo: None,
            url: None,
        },
        Sponsor {
            id: "sponsor-3",
            name: "Sponsor Logo 3",
            logo: None,
            url: None,
        },
    ],

    media: Media { photographer: None },

    theme: Theme {
        primary_color: "#5759a6",
        secondary_color: "#6c95b8",
        accent_color: "#6466e1",
    },
};

/// Social media links in display order.
pub fn social_media() -> Vec<(SocialPlatform, &'static SocialLink)> {
    let social = &SITE.social;
    vec![
        (SocialPlatform::Instagram, &social.instagram),
        (SocialPlatform::Discord, &social.discord),
        (SocialPlatform::Linkedin, &social.linkedin),
    ]
}

/// Postal address on two lines: street, then postal code, city and country.
pub fn format_address() -> String {
    let address = &SITE.contact.address;
    format!(
        "{},\n{} {}, {}",
        address.street, address.postal_code, address.city, address.country
    )
}

/// Organization name with audience and city, for page titles and metadata.
pub fn full_organization_name() -> String {
    format!(
        "{} - {} in {}",
        SITE.organization.name, SITE.organization.target_audience, SITE.contact.address.city
    )
}
