use serde::{Deserialize, Serialize};

/// How a provider can see patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Virtual,
    InPerson,
}

impl Capability {
    /// Badge text shown on provider cards.
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Virtual => "virtual",
            Capability::InPerson => "in-person",
        }
    }
}

/// A clinical specialist shown for selection. Sample data, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    pub id: &'static str,
    pub name: &'static str,
    /// Discipline label, e.g. "Physiotherapist"
    pub category: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub capabilities: &'static [Capability],
    pub blurb: &'static str,
}

impl ProviderRecord {
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Rating as displayed on cards ("4.9", "5.0").
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

pub static PROVIDERS: &[ProviderRecord] = &[
    ProviderRecord {
        id: "1",
        name: "Sarah Chen, PT",
        category: "Physiotherapist",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=800",
        rating: 4.9,
        reviews: 124,
        capabilities: &[Capability::Virtual, Capability::InPerson],
        blurb: "Specializes in sports injury recovery and post-operative rehabilitation. Sarah uses a mix of manual therapy and personalized exercise plans.",
    },
    ProviderRecord {
        id: "2",
        name: "Michael Ross, DC",
        category: "Chiropractor",
        image: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?auto=format&fit=crop&q=80&w=800",
        rating: 4.8,
        reviews: 89,
        capabilities: &[Capability::InPerson],
        blurb: "Expert in spinal health and chronic pain management. Michael focuses on restoring mobility and function through targeted adjustments.",
    },
    ProviderRecord {
        id: "3",
        name: "Emma Wilson, RMT",
        category: "Massage Therapist",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=800",
        rating: 5.0,
        reviews: 56,
        capabilities: &[Capability::Virtual],
        blurb: "Holistic approach to wellness combining mental health strategies with physical recovery. Perfect for stress-related tension.",
    },
    ProviderRecord {
        id: "4",
        name: "David Kim, PT",
        category: "Physiotherapist",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&q=80&w=800",
        rating: 4.9,
        reviews: 78,
        capabilities: &[Capability::Virtual, Capability::InPerson],
        blurb: "Focuses on ergonomic health and workplace injury prevention. David helps you build resilience against daily strain.",
    },
    ProviderRecord {
        id: "5",
        name: "Lisa Patel, ND",
        category: "Naturopath",
        image: "https://images.unsplash.com/photo-1594744803329-e58b31de8bf5?auto=format&fit=crop&q=80&w=800",
        rating: 4.7,
        reviews: 42,
        capabilities: &[Capability::Virtual],
        blurb: "Lisa integrates natural therapies with modern science to support your body's innate healing ability.",
    },
    ProviderRecord {
        id: "6",
        name: "James Wright, RMT",
        category: "Massage Therapist",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=800",
        rating: 4.8,
        reviews: 110,
        capabilities: &[Capability::InPerson],
        blurb: "Deep tissue specialist with a focus on athletic recovery and muscle release techniques.",
    },
];

/// Look up a provider by id.
pub fn find_provider(id: &str) -> Option<&'static ProviderRecord> {
    PROVIDERS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_provider_ids_are_unique() {
        let ids: HashSet<_> = PROVIDERS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROVIDERS.len());
    }

    #[test]
    fn test_every_provider_has_a_capability() {
        for p in PROVIDERS {
            assert!(!p.capabilities.is_empty(), "{} has no capability tags", p.name);
        }
    }

    #[test]
    fn test_find_provider() {
        assert_eq!(find_provider("1").map(|p| p.name), Some("Sarah Chen, PT"));
        assert!(find_provider("99").is_none());
    }

    #[test]
    fn test_rating_label_keeps_one_decimal() {
        assert_eq!(find_provider("3").unwrap().rating_label(), "5.0");
        assert_eq!(find_provider("1").unwrap().rating_label(), "4.9");
    }

    #[test]
    fn test_supports() {
        let michael = find_provider("2").unwrap();
        assert!(michael.supports(Capability::InPerson));
        assert!(!michael.supports(Capability::Virtual));
    }
}
