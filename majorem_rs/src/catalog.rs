//! Static page content: the tool catalog and customer testimonials.


use serde::{Deserialize, Serialize};

use crate::demo::DemoId;

/// Decorative glyph drawn on a tool card. The site crate maps these to SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolIcon {
    Search,
    MessageCircle,
    MapPin,
    BarChart,
    Database,
    Eye,
    Cpu,
    Route,
    Users,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    DataCleaning,
    AiAnalysis,
    Analytics,
    Infrastructure,
    Optimization,
    Integration,
}

impl ToolCategory {
    pub fn slug(self) -> &'static str {
        match self {
            ToolCategory::DataCleaning => "data-cleaning",
            ToolCategory::AiAnalysis => "ai-analysis",
            ToolCategory::Analytics => "analytics",
            ToolCategory::Infrastructure => "infrastructure",
            ToolCategory::Optimization => "optimization",
            ToolCategory::Integration => "integration",
        }
    }
}

/// A card in the "Our Powerful Tools" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub icon: ToolIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    /// Present when the card offers a "Try Demo" button.
    pub demo: Option<DemoId>,
}

impl Tool {
    /// Hyphenated lowercase title, used as the card's anchor id.
    pub fn slug(&self) -> String {
        slugify(self.title)
    }
}

pub const TOOLS: &[Tool] = &[
    Tool {
        icon: ToolIcon::Search,
        title: "Fuzzy Matching",
        description: "Intelligently match and merge duplicate customer records across your databases with advanced fuzzy logic algorithms.",
        category: ToolCategory::DataCleaning,
        demo: None,
    },
    Tool {
        icon: ToolIcon::MessageCircle,
        title: "Sentiment Analysis",
        description: "Understand customer emotions and opinions from reviews, surveys, and support tickets using AI-powered NLP.",
        category: ToolCategory::AiAnalysis,
        demo: Some(DemoId::SentimentAnalysis),
    },
    Tool {
        icon: ToolIcon::MapPin,
        title: "Address Cleaning",
        description: "Standardize, validate, and geocode messy address data to ensure delivery accuracy and data integrity.",
        category: ToolCategory::DataCleaning,
        demo: Some(DemoId::AddressCleaning),
    },
    Tool {
        icon: ToolIcon::BarChart,
        title: "Data Analysis",
        description: "Transform raw data into actionable insights with automated exploratory analysis and visualization dashboards.",
        category: ToolCategory::Analytics,
        demo: None,
    },
    Tool {
        icon: ToolIcon::Database,
        title: "Database Architecture",
        description: "Design scalable, efficient, and secure database schemas tailored to your business requirements and growth trajectory.",
        category: ToolCategory::Infrastructure,
        demo: None,
    },
    Tool {
        icon: ToolIcon::Eye,
        title: "Image Recognition",
        description: "Automatically tag, classify, and analyze product or customer images with computer vision technology.",
        category: ToolCategory::AiAnalysis,
        demo: None,
    },
    Tool {
        icon: ToolIcon::Cpu,
        title: "AI/MCP Servers",
        description: "Deploy custom AI pipelines and microservices with our managed infrastructure for seamless integration.",
        category: ToolCategory::Infrastructure,
        demo: None,
    },
    Tool {
        icon: ToolIcon::Route,
        title: "Route Planning",
        description: "Optimize delivery routes and field service schedules to reduce costs and improve customer satisfaction.",
        category: ToolCategory::Optimization,
        demo: None,
    },
    Tool {
        icon: ToolIcon::Users,
        title: "HubSpot CRM Integration",
        description: "Seamlessly sync, enrich, and automate your HubSpot CRM data with our specialized integration tools.",
        category: ToolCategory::Integration,
        demo: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Number of stars, 1 to 5.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        company: "GrowthMetrics Inc.",
        role: "CEO",
        content: "Majorem reduced our data cleaning time by 85% and helped us identify $250K in upsell opportunities through sentiment analysis.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Rodriguez",
        company: "DataFlow Solutions",
        role: "CTO",
        content: "The address cleaning tool alone paid for our annual subscription within the first month. Integration with our existing stack was seamless.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Thompson",
        company: "StartupLaunch Co.",
        role: "Marketing Director",
        content: "As a small team, we needed powerful tools without enterprise complexity. Majorem delivered exactly that with exceptional support.",
        rating: 5,
    },
];

/// Lowercase `title` and join whitespace-separated words with `-`.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_tools_in_order() {
        assert_eq!(TOOLS.len(), 9);
        assert_eq!(TOOLS[0].title, "Fuzzy Matching");
        assert_eq!(TOOLS[8].title, "HubSpot CRM Integration");
    }

    #[test]
    fn demo_slugs_match_tool_titles() {
        let demos: Vec<_> = TOOLS.iter().filter(|tool| tool.demo.is_some()).collect();
        assert_eq!(demos.len(), 2);
        for tool in demos {
            let id = tool.demo.unwrap();
            assert_eq!(id.slug(), tool.slug());
        }
    }

    #[test]
    fn every_demo_has_a_card() {
        for id in DemoId::ALL {
            assert!(TOOLS.iter().any(|tool| tool.demo == Some(id)));
        }
    }

    #[test]
    fn slugify_keeps_punctuation() {
        assert_eq!(slugify("AI/MCP Servers"), "ai/mcp-servers");
        assert_eq!(slugify("HubSpot  CRM\tIntegration"), "hubspot-crm-integration");
    }

    #[test]
    fn category_slugs() {
        assert_eq!(ToolCategory::DataCleaning.slug(), "data-cleaning");
        assert_eq!(ToolCategory::AiAnalysis.slug(), "ai-analysis");
        assert_eq!(TOOLS[2].category, ToolCategory::DataCleaning);
    }

    #[test]
    fn testimonials_are_five_star() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }
}
