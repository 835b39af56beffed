//! Static résumé content: section identifiers and the content registry.
//!
//! The registry is pure data: a closed mapping from [`SectionId`] to
//! [`ContentEntry`] built once at startup.  Content is structured
//! ([`ContentBlock`] trees), not raw markup; the popup presenter decides how
//! each block is rendered.

use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use std::collections::HashMap;
use std::fmt;

// ── Section identifiers ───────────────────────────────────────────────────────

/// One named résumé category.  Closed enumeration: the registry covers every
/// variant, and platform descriptors can only reference these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Education,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections, in the order they appear along the platform run.
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Label text rendered on the floating sign above the section's platform.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Content model ─────────────────────────────────────────────────────────────

/// One block of popup body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// A plain paragraph.
    Paragraph(&'static str),
    /// A headed list item (role, school, …) with supporting detail.
    Item {
        heading: &'static str,
        detail: &'static str,
    },
    /// An external reference: display label, target URL, supporting detail.
    Link {
        label: &'static str,
        url: &'static str,
        detail: &'static str,
    },
}

/// Display content for one résumé section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Text for the popup's title slot.
    pub title: &'static str,
    /// Ordered body blocks rendered below the title.
    pub body: Vec<ContentBlock>,
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// The static `SectionId → ContentEntry` mapping.  Built once, never mutated.
#[derive(Resource)]
pub struct ContentRegistry {
    entries: HashMap<SectionId, ContentEntry>,
}

impl ContentRegistry {
    /// Resolve a section's content.
    ///
    /// Can only fail if a variant was left out of the registry construction
    /// below; callers at the popup boundary log the error and drop the
    /// activation rather than crashing the session.
    pub fn entry(&self, section: SectionId) -> GameResult<&ContentEntry> {
        self.entries
            .get(&section)
            .ok_or(GameError::UnknownSection { section })
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            SectionId::About,
            ContentEntry {
                title: "About",
                body: vec![ContentBlock::Paragraph(
                    "I am a software engineer focused on systems programming, \
                     real-time simulation, and developer tooling. I like small \
                     teams, fast feedback loops, and shipping things people \
                     actually use. Away from the keyboard I climb and tinker \
                     with synthesizers.",
                )],
            },
        );

        entries.insert(
            SectionId::Experience,
            ContentEntry {
                title: "Experience",
                body: vec![
                    ContentBlock::Item {
                        heading: "Backend Engineer — Fieldline Robotics (2024 – present)",
                        detail: "Own the telemetry ingestion service (Rust, \
                                 Postgres): stream processing for ~40k sensor \
                                 messages/s, on-call rotation, and the internal \
                                 replay tooling the fleet team debugs with.",
                    },
                    ContentBlock::Item {
                        heading: "Software Engineering Intern — Fieldline Robotics (2023)",
                        detail: "Built the first version of the fleet dashboard \
                                 and cut cold-start time of the simulation \
                                 harness from minutes to seconds.",
                    },
                    ContentBlock::Item {
                        heading: "Teaching Assistant — Operating Systems (2022 – 2023)",
                        detail: "Ran weekly labs for 60 students; wrote the \
                                 autograder still used by the course.",
                    },
                ],
            },
        );

        entries.insert(
            SectionId::Education,
            ContentEntry {
                title: "Education",
                body: vec![
                    ContentBlock::Item {
                        heading: "B.Sc. Computer Science — Aalto University (2020 – 2024)",
                        detail: "Focus on distributed systems and computer \
                                 graphics. Thesis: deterministic replay for \
                                 entity-component game engines.",
                    },
                    ContentBlock::Item {
                        heading: "Exchange year — TU Delft (2022 – 2023)",
                        detail: "Embedded systems and real-time scheduling \
                                 coursework.",
                    },
                ],
            },
        );

        entries.insert(
            SectionId::Projects,
            ContentEntry {
                title: "Projects",
                body: vec![
                    ContentBlock::Link {
                        label: "platfolio",
                        url: "https://github.com/alexhale/platfolio",
                        detail: "This game — a platformer that is also a résumé.",
                    },
                    ContentBlock::Link {
                        label: "tapedeck",
                        url: "https://github.com/alexhale/tapedeck",
                        detail: "Record-and-replay proxy for flaky integration \
                                 tests; captures HTTP traffic and serves it back \
                                 deterministically.",
                    },
                    ContentBlock::Link {
                        label: "hexfield",
                        url: "https://github.com/alexhale/hexfield",
                        detail: "Hex-grid pathfinding crate with flow-field \
                                 support; used by two published indie games.",
                    },
                ],
            },
        );

        entries.insert(
            SectionId::Contact,
            ContentEntry {
                title: "Contact",
                body: vec![
                    ContentBlock::Link {
                        label: "Email",
                        url: "mailto:hello@alexhale.dev",
                        detail: "hello@alexhale.dev",
                    },
                    ContentBlock::Link {
                        label: "GitHub",
                        url: "https://github.com/alexhale",
                        detail: "github.com/alexhale",
                    },
                    ContentBlock::Link {
                        label: "LinkedIn",
                        url: "https://www.linkedin.com/in/alexhale",
                        detail: "linkedin.com/in/alexhale",
                    },
                ],
            },
        );

        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_resolves() {
        let registry = ContentRegistry::default();
        for section in SectionId::ALL {
            let entry = registry
                .entry(section)
                .unwrap_or_else(|e| panic!("registry incomplete: {e}"));
            assert!(!entry.title.is_empty());
            assert!(!entry.body.is_empty());
        }
    }

    #[test]
    fn contact_entry_has_expected_shape() {
        let registry = ContentRegistry::default();
        let entry = registry.entry(SectionId::Contact).unwrap();
        assert_eq!(entry.title, "Contact");
        assert_eq!(entry.body.len(), 3);
        assert!(matches!(entry.body[0], ContentBlock::Link { label: "Email", .. }));
    }

    #[test]
    fn labels_match_section_order() {
        let labels: Vec<_> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["About", "Experience", "Education", "Projects", "Contact"]
        );
    }
}
