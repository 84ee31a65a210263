//! Static copy for the marketing pages.

use crate::config;

pub struct Stat {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Years Experience", value: 15.0, suffix: "+", icon: "fas fa-clock" },
    Stat { label: "Clients Served", value: 200.0, suffix: "+", icon: "fas fa-building" },
    Stat { label: "System Uptime", value: 99.5, suffix: "%", icon: "fas fa-bolt" },
];

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_SERVICES: &[Card] = &[
    Card { icon: "fas fa-wrench", title: "Site Audits", description: "Comprehensive system evaluations to identify inefficiencies." },
    Card { icon: "fas fa-building", title: "Installation", description: "Professional deployment with minimal downtime." },
    Card { icon: "fas fa-shield-halved", title: "Maintenance", description: "Scheduled programs to extend equipment life." },
    Card { icon: "fas fa-clock", title: "24/7 Support", description: "Rapid response for critical system failures." },
];

pub const INDUSTRIES: &[Card] = &[
    Card { icon: "fas fa-hotel", title: "Hotels & Hospitality", description: "Comfort systems for guests" },
    Card { icon: "fas fa-industry", title: "Manufacturing", description: "Industrial-grade solutions" },
    Card { icon: "fas fa-droplet", title: "Water Utilities", description: "Municipal infrastructure" },
];

pub const WHY_US: &[&str] = &[
    "Local expertise with international standards",
    "Certified technicians and engineers",
    "Genuine parts and quality products",
    "Transparent pricing with no hidden costs",
];

pub struct ProductCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub applications: &'static [&'static str],
}

pub const PRODUCTS: &[ProductCategory] = &[
    ProductCategory {
        id: "coolants",
        title: "Industrial Coolants",
        summary: "High-performance cooling fluids for industrial HVAC systems.",
        description: "High-performance cooling fluids designed for industrial and commercial HVAC systems. Our coolants provide superior heat transfer, corrosion protection, and extended service life.",
        image: "/assets/product-coolant.jpg",
        features: &[
            "Extended service intervals",
            "Corrosion inhibitors included",
            "Compatible with multiple system types",
            "Eco-friendly formulations available",
        ],
        applications: &["Hotels & Resorts", "Manufacturing Plants", "Data Centers", "Commercial Buildings"],
    },
    ProductCategory {
        id: "chillers",
        title: "Commercial Chillers",
        summary: "Energy-efficient units for hotels and large facilities.",
        description: "Energy-efficient chiller units ranging from compact systems to large-scale industrial cooling solutions. Designed for reliability and performance in demanding environments.",
        image: "/assets/product-chiller.jpg",
        features: &[
            "High energy efficiency ratings",
            "Low noise operation",
            "Remote monitoring capable",
            "Modular designs for scalability",
        ],
        applications: &["Hotels & Hospitality", "Food Processing", "Pharmaceutical", "Industrial Facilities"],
    },
    ProductCategory {
        id: "filtration",
        title: "Water Filtration Systems",
        summary: "Advanced solutions for clean, safe water everywhere.",
        description: "Advanced water treatment and filtration solutions for clean, safe water in any environment. From point-of-use filters to large-scale treatment plants.",
        image: "/assets/product-filtration.jpg",
        features: &[
            "Multi-stage filtration",
            "Reverse osmosis systems",
            "UV disinfection options",
            "Customizable configurations",
        ],
        applications: &["Municipal Water", "Hotels & Resorts", "Hospitals", "Industrial Process Water"],
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-clipboard-check",
        title: "Site Audits & Diagnostics",
        description: "Comprehensive assessment of your existing cooling and water systems to identify inefficiencies, potential failures, and optimization opportunities.",
        details: &[
            "Full system performance analysis",
            "Energy efficiency evaluation",
            "Equipment condition assessment",
            "Detailed recommendations report",
        ],
    },
    Service {
        icon: "fas fa-building",
        title: "Installation & Commissioning",
        description: "Professional installation of cooling and filtration systems by certified technicians, ensuring optimal performance from day one.",
        details: &[
            "Project planning and coordination",
            "Professional equipment installation",
            "System testing and commissioning",
            "Operator training and handover",
        ],
    },
    Service {
        icon: "fas fa-shield-halved",
        title: "Preventive Maintenance",
        description: "Scheduled maintenance programs designed to extend equipment life, maintain efficiency, and prevent unexpected breakdowns.",
        details: &[
            "Regular inspection schedules",
            "Filter and fluid replacements",
            "Performance monitoring",
            "Predictive maintenance alerts",
        ],
    },
    Service {
        icon: "fas fa-wrench",
        title: "Repairs & Servicing",
        description: "Expert repair services for all major cooling and filtration equipment brands, using genuine parts and proven techniques.",
        details: &[
            "Diagnosis and troubleshooting",
            "Component repair and replacement",
            "System optimization",
            "Quality assurance testing",
        ],
    },
    Service {
        icon: "fas fa-clock",
        title: "24/7 Emergency Response",
        description: "Round-the-clock emergency support for critical system failures, minimizing downtime and protecting your operations.",
        details: &[
            "Immediate response team dispatch",
            "Remote diagnostic support",
            "Priority parts sourcing",
            "Temporary solutions when needed",
        ],
    },
    Service {
        icon: "fas fa-triangle-exclamation",
        title: "Problem Reporting",
        description: "Structured issue reporting and tracking system to ensure all problems are documented, addressed, and resolved efficiently.",
        details: &[
            "Formal issue documentation",
            "Priority-based resolution",
            "Progress tracking",
            "Root cause analysis",
        ],
    },
];

pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[Step] = &[
    Step { step: "01", title: "Contact", description: "Reach out via phone, email, or our contact form" },
    Step { step: "02", title: "Assessment", description: "We evaluate your needs and propose solutions" },
    Step { step: "03", title: "Execution", description: "Our team delivers professional service" },
    Step { step: "04", title: "Follow-up", description: "We ensure your satisfaction and ongoing support" },
];

pub const VALUES: &[Card] = &[
    Card { icon: "fas fa-bullseye", title: "Reliability", description: "We deliver consistent, dependable solutions that keep your systems running without interruption." },
    Card { icon: "fas fa-users", title: "Partnership", description: "We build long-term relationships, becoming an extension of your operations team." },
    Card { icon: "fas fa-globe", title: "Local Expertise", description: "Deep understanding of East African industries and infrastructure challenges." },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { year: "2008", title: "Company Founded", description: "HydroX established in Nairobi, Kenya" },
    Milestone { year: "2012", title: "Regional Expansion", description: "Extended operations to Tanzania and Uganda" },
    Milestone { year: "2016", title: "ISO Certification", description: "Achieved ISO 9001:2015 quality certification" },
    Milestone { year: "2020", title: "200+ Clients", description: "Milestone of serving over 200 organizations" },
];

pub const STRENGTHS: &[&str] = &[
    "Factory-trained technicians and engineers",
    "24/7 emergency support across East Africa",
    "Genuine products from trusted manufacturers",
    "Transparent, competitive pricing",
];

pub const COUNTRIES: &[&str] = &["Kenya", "Tanzania", "Uganda"];

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "fas fa-phone", title: "Phone", value: config::PHONE_DISPLAY, href: Some(config::PHONE_HREF) },
    ContactChannel { icon: "fas fa-envelope", title: "Email", value: config::SALES_EMAIL, href: Some("mailto:info@hydrox.co.ke") },
    ContactChannel { icon: "fas fa-location-dot", title: "Address", value: config::NAIROBI_ADDRESS, href: None },
    ContactChannel { icon: "fas fa-clock", title: "Business Hours", value: config::BUSINESS_HOURS, href: None },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_unique() {
        let mut ids: Vec<&str> = PRODUCTS.iter().map(|product| product.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn email_link_matches_displayed_address() {
        let email = CONTACT_CHANNELS.iter().find(|channel| channel.title == "Email").unwrap();
        assert_eq!(email.href, Some(format!("mailto:{}", email.value).as_str()));
    }
}
