//! Site copy.
//!
//! Everything the sections render that is not layout: service offerings,
//! values, technology features, office details and contact deep links.

use url::Url;

/// A 3PL service offering shown as a card.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub icon_fallback: &'static str,
    pub benefits: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Ecommerce Fulfillment",
        description: "Fast, accurate direct-to-consumer fulfillment for modern brands across key verticals.",
        icon: "/icons/warehousing.svg",
        icon_fallback: "📦",
        benefits: &[
            "Apparel",
            "Cosmetics",
            "Electronics",
            "Health & Wellness",
            "Food & Beverage",
        ],
    },
    Service {
        title: "B2B Distribution",
        description: "Retail and wholesale order fulfillment with compliant routing, labeling, and scheduling.",
        icon: "/icons/supply-chain.svg",
        icon_fallback: "🏷️",
        benefits: &["Retail compliance", "EDI/ASN support", "Palletization & labeling"],
    },
    Service {
        title: "Value-Added Services",
        description: "Flexible projects that enhance your brand experience and unit economics.",
        icon: "/icons/data-analytics.svg",
        icon_fallback: "🧰",
        benefits: &["Kitting & Assembly", "Custom Packaging", "Returns Management"],
    },
    Service {
        title: "Trucking & Transportation",
        description: "Reliable domestic transportation with proactive communication and tracking.",
        icon: "/icons/fleet-management.svg",
        icon_fallback: "🚚",
        benefits: &["LTL & FTL Shipping", "Last Mile Delivery", "Expedited options"],
    },
    Service {
        title: "Warehouse Management",
        description: "Operations designed for accuracy, visibility, and control at scale.",
        icon: "/icons/warehousing.svg",
        icon_fallback: "🏭",
        benefits: &["Inventory Control", "Order Processing", "Cycle counting & QA"],
    },
];

/// Title plus one line of copy.
#[derive(Debug, Clone, Copy)]
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CORE_VALUES: &[Blurb] = &[
    Blurb {
        title: "Heritage & Innovation",
        description: "Blending our rich family history with cutting-edge technology",
    },
    Blurb {
        title: "Reliability & Precision",
        description: "Consistently delivering on promises with data-driven accuracy",
    },
    Blurb {
        title: "Transparency & Control",
        description: "Providing complete visibility and actionable insights",
    },
    Blurb {
        title: "Sustainability & Efficiency",
        description: "Optimizing operations to reduce environmental impact",
    },
];

/// A card with an icon (and glyph fallback).
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub icon_fallback: &'static str,
    /// Short tag shown under the description, if any.
    pub stat: Option<&'static str>,
}

pub const DIFFERENTIATORS: &[Feature] = &[
    Feature {
        title: "Tech-Enabled Services",
        description: "We connect with all major technology providers to power every aspect of our operations",
        icon: "/icons/tech-platform.svg",
        icon_fallback: "⚙️",
        stat: None,
    },
    Feature {
        title: "Family-Owned, Enterprise Capabilities",
        description: "Combining the personal touch of a family business with enterprise-grade solutions",
        icon: "/icons/family-enterprise.svg",
        icon_fallback: "👨‍👩‍👧‍👦",
        stat: None,
    },
    Feature {
        title: "Brand-Focused Approach",
        description: "Specifically designed to meet the unique needs of consumer brands",
        icon: "/icons/brand-focus.svg",
        icon_fallback: "🔍",
        stat: None,
    },
];

pub const TECH_FEATURES: &[Feature] = &[
    Feature {
        title: "Data & Analytics",
        description: "Operational reporting and analytics across shipments, inventory, and service metrics.",
        icon: "/icons/data-analytics.svg",
        icon_fallback: "📊",
        stat: Some("BI dashboards"),
    },
    Feature {
        title: "Visibility",
        description: "Real-time shipment tracking using provider tools and optional IoT where available.",
        icon: "/icons/iot-network.svg",
        icon_fallback: "📡",
        stat: Some("Live tracking"),
    },
    Feature {
        title: "EDI & API Connectivity",
        description: "Standard EDI documents and REST APIs to connect ERPs, e-commerce, marketplaces, and TMS/WMS.",
        icon: "/icons/api-connection.svg",
        icon_fallback: "🔄",
        stat: Some("EDI / REST"),
    },
    Feature {
        title: "Control Center",
        description: "Exception monitoring and communication across carriers, facilities, and partners.",
        icon: "/icons/control-tower.svg",
        icon_fallback: "🔍",
        stat: Some("Exception management"),
    },
];

pub const TECH_COMPONENTS: &[Blurb] = &[
    Blurb {
        title: "Web & Mobile Apps",
        description: "User-friendly interfaces for both desktop and mobile provide real-time access to shipment information, reporting, and key metrics.",
    },
    Blurb {
        title: "Real-Time Dashboards",
        description: "Customizable business intelligence dashboards with actionable insights tailored to specific brand needs.",
    },
    Blurb {
        title: "Automated Billing",
        description: "Streamlined invoicing with digital documentation and automated reconciliation to reduce accounting overhead.",
    },
];

/// An office shown in the contact section.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub city: &'static str,
    pub state: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    /// Empty when the office has no public mailbox.
    pub email: &'static str,
}

pub const LOCATIONS: &[Location] = &[Location {
    city: "Lewistown",
    state: "PA",
    address: "Norlin Warehousing & Noerr Trucking",
    phone: "+1 (717) 242-0566",
    email: "",
}];

/// In-page navigation anchors, in menu order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Services", "#services"),
    ("Technology", "#technology"),
    ("Contact", "#contact"),
];

/// Subject line pre-filled in the mail deep link.
pub const MAIL_SUBJECT: &str = "Logistics Inquiry";

/// `tel:` deep link for a display phone number such as `+1 (717) 242-0566`.
pub fn tel_link(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{dialable}")
}

/// `mailto:` deep link with a pre-filled subject.
pub fn mailto_link(address: &str, subject: &str) -> String {
    // Url handles the percent-encoding of the subject.
    match Url::parse(&format!("mailto:{address}")) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("subject", subject);
            // mailto clients expect %20 rather than `+` for spaces.
            url.as_str().replace('+', "%20")
        }
        Err(_) => format!("mailto:{address}"),
    }
}
