use thiserror::Error;

/// The four mutually-exclusive top-level content views. The token returned by
/// [`SectionId::as_str`] is what appears in the URL fragment and in the
/// `data-section` attributes on the rendered markup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    Operations,
    Integration,
    Infrastructure,
    Applications,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Operations,
        SectionId::Integration,
        SectionId::Infrastructure,
        SectionId::Applications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Operations => "operations",
            SectionId::Integration => "integration",
            SectionId::Infrastructure => "infrastructure",
            SectionId::Applications => "applications",
        }
    }

    pub fn parse(token: &str) -> Option<SectionId> {
        Self::ALL.iter().copied().find(|id| id.as_str() == token)
    }

    /// DOM id of the top-level content container for this section.
    pub fn container_id(&self) -> String {
        format!("{}-section", self.as_str())
    }
}

/// An anchor inside a section's content that a submenu link scrolls to.
/// `id` doubles as the element id and the `#fragment` token.
#[derive(Debug)]
pub struct SubTarget {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct Section {
    pub id: SectionId,
    pub tab_label: &'static str,
    pub sub_targets: &'static [SubTarget],
}

/// What a URL fragment resolved to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavTarget {
    Section(SectionId),
    SubTarget {
        section: SectionId,
        anchor: &'static str,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section '{0}' has no submenu links")]
    EmptySubmenu(&'static str),
    #[error("sub-target id '{0}' is empty or repeated across sections")]
    DuplicateAnchor(&'static str),
    #[error("sub-target id '{0}' collides with a section token")]
    AnchorShadowsSection(&'static str),
}

static SECTIONS: [Section; 4] = [
    Section {
        id: SectionId::Operations,
        tab_label: "Operations",
        sub_targets: &[
            SubTarget { id: "hero", label: "Overview" },
            SubTarget { id: "features", label: "Features" },
            SubTarget { id: "solutions", label: "Solutions" },
            SubTarget { id: "pricing", label: "Pricing" },
            SubTarget { id: "contact", label: "Contact" },
        ],
    },
    Section {
        id: SectionId::Integration,
        tab_label: "Integration",
        sub_targets: &[
            SubTarget { id: "partner-connectors", label: "Partner Connectors" },
            SubTarget { id: "bi-solutions", label: "BI Solutions" },
            SubTarget { id: "erp-integration", label: "ERP Integration" },
            SubTarget { id: "contact-integration", label: "Contact" },
        ],
    },
    Section {
        id: SectionId::Infrastructure,
        tab_label: "Infrastructure",
        sub_targets: &[
            SubTarget { id: "control-models", label: "Control Models" },
            SubTarget { id: "global-infrastructure", label: "Global Reach" },
            SubTarget { id: "data-security", label: "Data Security" },
            SubTarget { id: "contact-infrastructure", label: "Contact" },
        ],
    },
    Section {
        id: SectionId::Applications,
        tab_label: "Applications",
        sub_targets: &[
            SubTarget { id: "mobile-app", label: "Mobile App" },
            SubTarget { id: "web-apps", label: "Web Apps" },
            SubTarget { id: "alarm-center", label: "Alarm Center" },
            SubTarget { id: "contact-applications", label: "Contact" },
        ],
    },
];

static REGISTRY: Registry = Registry { sections: &SECTIONS };

/// Static mapping of sections to their tabs, submenu groups and content
/// containers. Built once from the table above; everything at runtime goes
/// through the typed lookups here instead of re-querying the DOM.
pub struct Registry {
    sections: &'static [Section],
}

impl Registry {
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn section(&self, id: SectionId) -> &'static Section {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .expect("every SectionId has a table entry")
    }

    /// First submenu link of a section's group, the default active link.
    pub fn first_anchor(&self, id: SectionId) -> &'static str {
        self.section(id).sub_targets[0].id
    }

    /// Looks an anchor token up within one section's submenu group.
    pub fn anchor_in(&self, id: SectionId, anchor: &str) -> Option<&'static SubTarget> {
        self.section(id).sub_targets.iter().find(|t| t.id == anchor)
    }

    /// Ancestry lookup: which section owns this anchor, if any.
    pub fn owner_of(&self, anchor: &str) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|s| s.sub_targets.iter().any(|t| t.id == anchor))
            .map(|s| s.id)
    }

    /// Resolves a bare fragment token (no leading '#') to a navigation
    /// target. Unknown tokens resolve to `None`.
    pub fn resolve(&self, token: &str) -> Option<NavTarget> {
        if let Some(id) = SectionId::parse(token) {
            return Some(NavTarget::Section(id));
        }
        for section in self.sections {
            if let Some(target) = section.sub_targets.iter().find(|t| t.id == token) {
                return Some(NavTarget::SubTarget {
                    section: section.id,
                    anchor: target.id,
                });
            }
        }
        None
    }

    /// Checks the table once at startup. A failure here means the markup and
    /// the table drifted apart, which should surface as a visible error
    /// instead of a half-working page.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen: Vec<&'static str> = Vec::new();
        for section in self.sections {
            if section.sub_targets.is_empty() {
                return Err(RegistryError::EmptySubmenu(section.id.as_str()));
            }
            for target in section.sub_targets {
                if target.id.is_empty() || seen.contains(&target.id) {
                    return Err(RegistryError::DuplicateAnchor(target.id));
                }
                if SectionId::parse(target.id).is_some() {
                    return Err(RegistryError::AnchorShadowsSection(target.id));
                }
                seen.push(target.id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        assert_eq!(Registry::global().validate(), Ok(()));
    }

    #[test]
    fn section_tokens_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::parse("sales"), None);
        assert_eq!(SectionId::parse(""), None);
    }

    #[test]
    fn resolves_section_tokens() {
        assert_eq!(
            Registry::global().resolve("integration"),
            Some(NavTarget::Section(SectionId::Integration))
        );
    }

    #[test]
    fn resolves_anchors_to_their_owner() {
        assert_eq!(
            Registry::global().resolve("data-security"),
            Some(NavTarget::SubTarget {
                section: SectionId::Infrastructure,
                anchor: "data-security",
            })
        );
        // pricing is a sub-target inside operations, not a section
        assert_eq!(
            Registry::global().resolve("pricing"),
            Some(NavTarget::SubTarget {
                section: SectionId::Operations,
                anchor: "pricing",
            })
        );
    }

    #[test]
    fn unknown_tokens_resolve_to_none() {
        assert_eq!(Registry::global().resolve("no-such-anchor"), None);
    }

    #[test]
    fn every_section_has_a_first_anchor() {
        let registry = Registry::global();
        for id in SectionId::ALL {
            let first = registry.first_anchor(id);
            assert_eq!(registry.owner_of(first), Some(id));
        }
    }
}
