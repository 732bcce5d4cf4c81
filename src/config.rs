//! Footer link table.
//!
//! The footer content is a compiled constant. Changing a link means
//! rebuilding and redeploying the site.

use std::collections::HashSet;

use crate::error::FooterConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLinkEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled column of footer links. `title` doubles as the render key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLinkEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterConfig {
    pub footer_links: &'static [FooterSection],
    pub footer_github_link: Option<&'static str>,
    pub footer_x_link: Option<&'static str>,
    pub footer_discord_link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Github,
    X,
    Discord,
}

impl SocialKind {
    pub fn aria_label(&self) -> &'static str {
        match self {
            SocialKind::Github => "Link to Uniswap Labs Github",
            SocialKind::X => "Link to Uniswap Labs X account",
            SocialKind::Discord => "Link to Uniswap Labs Discord",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
}

impl FooterConfig {
    pub fn has_sections(&self) -> bool {
        !self.footer_links.is_empty()
    }

    /// Social links that are set, always in GitHub, X, Discord order.
    /// An empty string counts as unset.
    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            (SocialKind::Github, self.footer_github_link),
            (SocialKind::X, self.footer_x_link),
            (SocialKind::Discord, self.footer_discord_link),
        ]
        .into_iter()
        .filter_map(|(kind, href)| match href {
            Some(href) if !href.is_empty() => Some(SocialLink { kind, href }),
            _ => None,
        })
        .collect()
    }

    /// Checks the properties the footer relies on for keyed rendering:
    /// unique section titles, unique labels within a section, and no empty
    /// titles, labels or hrefs.
    pub fn validate(&self) -> Result<(), FooterConfigError> {
        let mut titles = HashSet::new();
        for (index, section) in self.footer_links.iter().enumerate() {
            if section.title.is_empty() {
                return Err(FooterConfigError::EmptyTitle { index });
            }
            if !titles.insert(section.title) {
                return Err(FooterConfigError::DuplicateTitle(section.title.to_string()));
            }

            let mut labels = HashSet::new();
            for link in section.links {
                if link.label.is_empty() {
                    return Err(FooterConfigError::EmptyLabel {
                        section: section.title.to_string(),
                    });
                }
                if !labels.insert(link.label) {
                    return Err(FooterConfigError::DuplicateLabel {
                        section: section.title.to_string(),
                        label: link.label.to_string(),
                    });
                }
                if link.href.is_empty() {
                    return Err(FooterConfigError::EmptyHref {
                        section: section.title.to_string(),
                        label: link.label.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

pub static FOOTER_CONFIG: FooterConfig = FooterConfig {
    footer_links: &[
        FooterSection {
            title: "Developers",
            links: &[
                FooterLinkEntry {
                    label: "Whitepaper",
                    href: "https://app.uniswap.org/whitepaper-v4.pdf",
                },
                FooterLinkEntry {
                    label: "Bug Bounty",
                    href: "https://immunefi.com/bounty/uniswap/",
                },
                FooterLinkEntry {
                    label: "Token Lists",
                    href: "https://tokenlists.org/token-list?url=https://ipfs.io/ipns/tokens.uniswap.org",
                },
            ],
        },
        FooterSection {
            title: "Ecosystem",
            links: &[
                FooterLinkEntry {
                    label: "Uniswap App",
                    href: "https://app.uniswap.org/",
                },
                FooterLinkEntry {
                    label: "Governance",
                    href: "https://www.uniswapfoundation.org/governance",
                },
                FooterLinkEntry {
                    label: "Brand Asset",
                    href: "https://github.com/Uniswap/brand-assets/raw/main/Uniswap%20Brand%20Assets.zip",
                },
                FooterLinkEntry {
                    label: "Analytics",
                    href: "https://info.uniswap.org/",
                },
            ],
        },
        FooterSection {
            title: "Need Help?",
            links: &[
                FooterLinkEntry {
                    label: "Request an Update",
                    href: "https://portal.usepylon.com/uniswap-foundation/forms/uniswap-foundation-documentation-updates",
                },
                FooterLinkEntry {
                    label: "Developer Chat",
                    href: "https://discord.com/invite/uniswap",
                },
                FooterLinkEntry {
                    label: "Contact Us",
                    href: "https://portal.usepylon.com/uniswap-foundation/forms/uniswap-foundation-developer-support",
                },
            ],
        },
    ],
    footer_github_link: Some("https://github.com/uniswap/uniswap-docs"),
    footer_x_link: Some("https://twitter.com/Uniswap"),
    footer_discord_link: Some("https://discord.com/invite/uniswap"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_is_valid() {
        assert!(FOOTER_CONFIG.validate().is_ok());
        assert!(FOOTER_CONFIG.has_sections());
        assert_eq!(FOOTER_CONFIG.footer_links.len(), 3);
    }

    #[test]
    fn test_social_links_order() {
        let kinds: Vec<SocialKind> = FOOTER_CONFIG
            .social_links()
            .iter()
            .map(|link| link.kind)
            .collect();
        assert_eq!(kinds, vec![SocialKind::Github, SocialKind::X, SocialKind::Discord]);
    }

    #[test]
    fn test_empty_social_string_is_absent() {
        let config = FooterConfig {
            footer_links: &[],
            footer_github_link: Some(""),
            footer_x_link: None,
            footer_discord_link: Some("https://discord.com/invite/uniswap"),
        };
        let links = config.social_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, SocialKind::Discord);
        assert!(!config.has_sections());
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let config = FooterConfig {
            footer_links: &[
                FooterSection { title: "Developers", links: &[] },
                FooterSection { title: "Developers", links: &[] },
            ],
            footer_github_link: None,
            footer_x_link: None,
            footer_discord_link: None,
        };
        assert!(matches!(
            config.validate(),
            Err(FooterConfigError::DuplicateTitle(title)) if title == "Developers"
        ));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let config = FooterConfig {
            footer_links: &[FooterSection {
                title: "Ecosystem",
                links: &[
                    FooterLinkEntry { label: "Analytics", href: "https://info.uniswap.org/" },
                    FooterLinkEntry { label: "Analytics", href: "https://app.uniswap.org/" },
                ],
            }],
            footer_github_link: None,
            footer_x_link: None,
            footer_discord_link: None,
        };
        assert!(matches!(
            config.validate(),
            Err(FooterConfigError::DuplicateLabel { label, .. }) if label == "Analytics"
        ));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let no_title = FooterConfig {
            footer_links: &[FooterSection { title: "", links: &[] }],
            footer_github_link: None,
            footer_x_link: None,
            footer_discord_link: None,
        };
        assert!(matches!(
            no_title.validate(),
            Err(FooterConfigError::EmptyTitle { index: 0 })
        ));

        let no_href = FooterConfig {
            footer_links: &[FooterSection {
                title: "Need Help?",
                links: &[FooterLinkEntry { label: "Contact Us", href: "" }],
            }],
            ..no_title
        };
        assert!(matches!(
            no_href.validate(),
            Err(FooterConfigError::EmptyHref { .. })
        ));

        let no_label = FooterConfig {
            footer_links: &[FooterSection {
                title: "Developers",
                links: &[FooterLinkEntry {
                    label: "",
                    href: "https://immunefi.com/bounty/uniswap/",
                }],
            }],
            ..no_title
        };
        assert_eq!(
            no_label.validate(),
            Err(FooterConfigError::EmptyLabel {
                section: "Developers".to_string(),
            })
        );
    }
}
