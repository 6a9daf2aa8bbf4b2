//! Section Catalog
//!
//! The marketing-site content, keyed by section id. Everything here is
//! process-static: the catalog is built once at startup from the literals
//! below and never touched again.

use serde::Serialize;
use std::collections::BTreeMap;

/// One static content block of the marketing site
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortfolioSection {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub features: &'static [&'static str],
}

/// The fixed set of section ids, in site order
pub const SECTION_IDS: &[&str] = &[
    "hero",
    "services",
    "users",
    "differentiators",
    "capabilities",
    "features",
];

const SECTIONS: &[PortfolioSection] = &[
    PortfolioSection {
        id: "hero",
        title: "Emergent Labs",
        subtitle: "AI-Powered Application Development Platform",
        description: "The world's first truly agentic coding platform that helps developers build complete applications through conversational AI. From setup to deployment, we handle it all.",
        image_url: "https://images.unsplash.com/photo-1724190168156-e93ba2bfd041?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1ODF8MHwxfHNlYXJjaHwyfHxBSSUyMGRldmVsb3BtZW50fGVufDB8fHx8MTc1NTA2MzA5MXww&ixlib=rb-4.1.0&q=85",
        features: &[
            "Conversational Interface",
            "Full-Stack Development",
            "Built-in Deployment",
            "AI-Powered Coding",
        ],
    },
    PortfolioSection {
        id: "services",
        title: "Core Services",
        subtitle: "What We Offer",
        description: "Comprehensive AI-powered development solutions for all your application needs.",
        image_url: "https://images.unsplash.com/photo-1738003946582-aabeabf5e009?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1ODF8MHwxfHNlYXJjaHwzfHxBSSUyMGRldmVsb3BtZW50fGVufDB8fHx8MTc1NTA2MzA5MXww&ixlib=rb-4.1.0&q=85",
        features: &[
            "AI-powered full-stack application development",
            "Conversational interface for building apps (not form-based builders)",
            "Complete project lifecycle management from setup to deployment",
            "Built-in deployment, authentication, and infrastructure handling",
        ],
    },
    PortfolioSection {
        id: "users",
        title: "Target Users",
        subtitle: "Who We Serve",
        description: "Designed for developers, founders, and teams who want to build faster and more efficiently.",
        image_url: "https://images.unsplash.com/photo-1688733720228-4f7a18681c4f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwxfHxjb2RpbmclMjBwbGF0Zm9ybXxlbnwwfHx8fDE3NTUwNjMxMDJ8MA&ixlib=rb-4.1.0&q=85",
        features: &[
            "Developers who want to build faster",
            "PMs and operators building internal tools",
            "Solo founders and tech teams shipping MVPs and beyond",
            "Individuals with zero coding experience looking to build their first product",
        ],
    },
    PortfolioSection {
        id: "differentiators",
        title: "Key Differentiators",
        subtitle: "What Makes Us Unique",
        description: "Revolutionary approach to application development with AI at the core.",
        image_url: "https://images.pexels.com/photos/8438944/pexels-photo-8438944.jpeg",
        features: &[
            "World's first truly agentic vibe coding platform",
            "Conversational interface rather than traditional form-based builders",
            "Handles deployment, auth, and infrastructure from day one",
            "Focuses on both first mile (setup) and last mile (deploy & monitor)",
        ],
    },
    PortfolioSection {
        id: "capabilities",
        title: "Technical Capabilities",
        subtitle: "Powerful Technology Stack",
        description: "Comprehensive development capabilities across web and mobile platforms.",
        image_url: "https://images.unsplash.com/photo-1607743386830-f198fbd7f9c4?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwzfHxjb2RpbmclMjBwbGF0Zm9ybXxlbnwwfHx8fDE3NTUwNjMxMDJ8MA&ixlib=rb-4.1.0&q=85",
        features: &[
            "Web application development (React + FastAPI + MongoDB, Next.js)",
            "Mobile application development (Expo framework) - available for subscribed users",
            "Built-in GitHub integration for version control",
            "Live preview and testing capabilities",
            "Custom domain support for deployments",
            "AI integrations through Emergent LLM Key",
        ],
    },
    PortfolioSection {
        id: "features",
        title: "Platform Features",
        subtitle: "Complete Development Environment",
        description: "Everything you need to build, test, and deploy applications in one platform.",
        image_url: "https://images.unsplash.com/photo-1724190168156-e93ba2bfd041?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1ODF8MHwxfHNlYXJjaHwyfHxBSSUyMGRldmVsb3BtZW50fGVufDB8fHx8MTc1NTA2MzA5MXww&ixlib=rb-4.1.0&q=85",
        features: &[
            "Multiple AI agents (E1 stable, E1.1 experimental, Mobile Agent)",
            "Pro Mode for creating custom agents",
            "Credit-based pricing system",
            "Built-in testing and deployment tools",
            "Chat forking for managing complex projects",
        ],
    },
];

/// Catalog mapping section id to its content
///
/// Built once at startup; read-only afterwards.
#[derive(Debug, Clone)]
pub struct PortfolioCatalog {
    sections: BTreeMap<&'static str, PortfolioSection>,
}

impl PortfolioCatalog {
    pub fn new() -> Self {
        let sections = SECTIONS.iter().map(|s| (s.id, *s)).collect();
        Self { sections }
    }

    /// Full mapping of section id to section
    pub fn sections(&self) -> &BTreeMap<&'static str, PortfolioSection> {
        &self.sections
    }

    /// Look up a single section by id
    pub fn get(&self, section_id: &str) -> Option<&PortfolioSection> {
        self.sections.get(section_id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for PortfolioCatalog {
    fn default() -> Self {
        Self::new()
    }
}
