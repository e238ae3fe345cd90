//! Inline SVG icons in the Lucide stroke style (24x24, 2px stroke).
//!
//! Each icon is a list of path `d` strings. Decorative only, so every SVG is
//! `aria-hidden`.

use leptos::prelude::*;
use majorem::catalog::ToolIcon;

/// Renders an inline stroke icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_MAIL class="icon-accent" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data, one entry per `<path>`
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color; stars use `currentColor`
    #[prop(default = "none")]
    fill: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

/// Path data for a tool card glyph.
pub fn tool_icon(icon: ToolIcon) -> &'static [&'static str] {
    match icon {
        ToolIcon::Search => ICON_SEARCH,
        ToolIcon::MessageCircle => ICON_MESSAGE_CIRCLE,
        ToolIcon::MapPin => ICON_MAP_PIN,
        ToolIcon::BarChart => ICON_BAR_CHART,
        ToolIcon::Database => ICON_DATABASE,
        ToolIcon::Eye => ICON_EYE,
        ToolIcon::Cpu => ICON_CPU,
        ToolIcon::Route => ICON_ROUTE,
        ToolIcon::Users => ICON_USERS,
    }
}

/// Magnifying glass (Fuzzy Matching).
pub const ICON_SEARCH: &[&str] = &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z", "m21 21-4.3-4.3"];

/// Speech bubble (Sentiment Analysis).
pub const ICON_MESSAGE_CIRCLE: &[&str] = &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"];

/// Map pin (Address Cleaning).
pub const ICON_MAP_PIN: &[&str] = &[
    "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
    "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
];

/// Bar chart (Data Analysis).
pub const ICON_BAR_CHART: &[&str] = &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"];

/// Database cylinder (Database Architecture).
pub const ICON_DATABASE: &[&str] = &[
    "M21 5c0 1.66-4 3-9 3S3 6.66 3 5s4-3 9-3 9 1.34 9 3z",
    "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
    "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
];

/// Eye (Image Recognition).
pub const ICON_EYE: &[&str] = &[
    "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
    "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
];

/// Chip (AI/MCP Servers).
pub const ICON_CPU: &[&str] = &[
    "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "M9 9h6v6H9z",
    "M15 2v2",
    "M15 20v2",
    "M2 15h2",
    "M2 9h2",
    "M20 15h2",
    "M20 9h2",
    "M9 2v2",
    "M9 20v2",
];

/// Route (Route Planning).
pub const ICON_ROUTE: &[&str] = &[
    "M9 19a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
    "M9 19h8.5a3.5 3.5 0 0 0 0-7h-11a3.5 3.5 0 0 1 0-7H15",
    "M21 5a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
];

/// Two people (HubSpot CRM Integration).
pub const ICON_USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

/// Sparkles, used for the brand mark and "Try Demo".
pub const ICON_SPARKLES: &[&str] = &[
    "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
];

/// Star, filled for testimonial ratings.
pub const ICON_STAR: &[&str] = &[
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
];

/// Envelope.
pub const ICON_MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 6-10 7L2 6",
];

/// Phone handset.
pub const ICON_PHONE: &[&str] = &[
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
];

/// Paper plane.
pub const ICON_SEND: &[&str] = &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"];

/// Check mark in a circle.
pub const ICON_CHECK_CIRCLE: &[&str] = &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"];

/// Close cross.
pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];
