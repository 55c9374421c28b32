//! Static site content: bilingual copy, services and projects.
//!
//! Everything here is materialized once at compile time and never mutated.
//! Short UI labels that are not part of the content table (loader, footer
//! headings, aria labels) live in the fluent bundles instead, see
//! [`crate::i18n`].

use super::filter::Category;
use super::lang::{Localized, LocalizedStr};

/// Icon reference; the SVG markup lives in `components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Layers,
    Database,
    Workflow,
    Command,
    Activity,
    ShieldCheck,
    Zap,
    ZapOff,
    ArrowRight,
    ArrowUpRight,
    ExternalLink,
    Close,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Layers,
        Icon::Database,
        Icon::Workflow,
        Icon::Command,
        Icon::Activity,
        Icon::ShieldCheck,
        Icon::Zap,
        Icon::ZapOff,
        Icon::ArrowRight,
        Icon::ArrowUpRight,
        Icon::ExternalLink,
        Icon::Close,
    ];
}

/// Background token for a project thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    Zinc900,
    Onyx,
    Zinc950,
    Neutral900,
    Stone900,
    Zinc800,
}

impl Swatch {
    pub fn css_class(self) -> &'static str {
        match self {
            Swatch::Zinc900 => "swatch--zinc-900",
            Swatch::Onyx => "swatch--onyx",
            Swatch::Zinc950 => "swatch--zinc-950",
            Swatch::Neutral900 => "swatch--neutral-900",
            Swatch::Stone900 => "swatch--stone-900",
            Swatch::Zinc800 => "swatch--zinc-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: LocalizedStr,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: LocalizedStr,
    pub description: LocalizedStr,
    pub icon: Icon,
    pub tags: Localized<&'static [&'static str]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    /// Display name, identical in both languages.
    pub title: &'static str,
    pub category: Category,
    pub label: LocalizedStr,
    pub year: u16,
    pub swatch: Swatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub category: Category,
    pub label: LocalizedStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub tag: LocalizedStr,
    pub title_lead: LocalizedStr,
    pub title_outline: LocalizedStr,
    pub title_accent: LocalizedStr,
    pub description: LocalizedStr,
    pub cta: LocalizedStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionCopy {
    pub label: LocalizedStr,
    pub title: LocalizedStr,
    pub description: LocalizedStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesCopy {
    pub heading: LocalizedStr,
    pub consult: LocalizedStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkCopy {
    pub label: LocalizedStr,
    pub title: LocalizedStr,
    pub archive_cta: LocalizedStr,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        id: "philosophy",
        label: Localized::new("Visión", "Vision"),
        href: "#philosophy",
    },
    NavLink {
        id: "services",
        label: Localized::new("Capacidades", "Capabilities"),
        href: "#services",
    },
    NavLink {
        id: "work",
        label: Localized::new("Proyectos", "Projects"),
        href: "#work",
    },
    NavLink {
        id: "contact",
        label: Localized::new("Contacto", "Contact"),
        href: "#contact",
    },
];

pub static HERO: HeroCopy = HeroCopy {
    tag: Localized::new(
        "Protocolo v2.6 // Alto Rendimiento",
        "Protocol v2.6 // High Performance",
    ),
    title_lead: Localized::new("ARQUITECTURA", "ENGINEERING"),
    title_outline: Localized::same("DIGITAL"),
    title_accent: Localized::new("SIN LÍMITES", "ARTIFACTS"),
    description: Localized::new(
        "Integramos datos, diseño y funcionalidad en un sistema estratégico único diseñado para dominar tu sector.",
        "We integrate data, design, and functionality into a unique strategic system designed to dominate your sector.",
    ),
    cta: Localized::new("Iniciar Sistema", "Launch System"),
};

pub static VISION: VisionCopy = VisionCopy {
    label: Localized::new("VISIÓN", "VISION"),
    title: Localized::new(
        "La tecnología es un sistema vivo.",
        "Technology is a living system.",
    ),
    description: Localized::new(
        "Creamos sistemas que no se pueden replicar, diseñados desde cero para tomar decisiones en milisegundos.",
        "We create systems that cannot be replicated, designed from scratch to make decisions in milliseconds.",
    ),
};

pub static SERVICES_COPY: ServicesCopy = ServicesCopy {
    heading: Localized::new("CAPACIDADES", "CAPABILITIES"),
    consult: Localized::new("Consultar", "Consult"),
};

pub static WORK: WorkCopy = WorkCopy {
    label: Localized::new("ARCHIVO", "ARCHIVE"),
    title: Localized::new("PROYECTOS SELECCIONADOS", "SELECTED PROJECTS"),
    archive_cta: Localized::new("Explorar Archivo Completo", "Explore Full Archive"),
};

pub static FILTERS: [FilterOption; 4] = [
    FilterOption {
        category: Category::All,
        label: Localized::new("Todos", "All"),
    },
    FilterOption {
        category: Category::Web,
        label: Localized::new("Diseño Web", "Web Design"),
    },
    FilterOption {
        category: Category::Dashboard,
        label: Localized::same("Dashboards"),
    },
    FilterOption {
        category: Category::Integration,
        label: Localized::new("Integraciones", "Integrations"),
    },
];

pub static PHILOSOPHY_QUOTE: LocalizedStr = Localized::new(
    "Transformamos la complejidad técnica en una ventaja competitiva de alto rendimiento.",
    "We transform technical complexity into a high-performance competitive advantage.",
);

pub static FOOTER_TAGLINE: LocalizedStr = Localized::new(
    "Arquitectura digital para aquellos que exigen la excelencia absoluta.",
    "Digital architecture for those who demand absolute excellence.",
);

/// Icons in the row under the manifesto quote.
pub static MANIFESTO_ICONS: [Icon; 4] = [
    Icon::Command,
    Icon::Database,
    Icon::ShieldCheck,
    Icon::ZapOff,
];

pub static SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "#"),
    ("LinkedIn", "#"),
    ("Dribbble", "#"),
];

pub const CONTACT_EMAIL: &str = "hello@jurne.studio";

pub static SERVICES: [Service; 3] = [
    Service {
        id: "01",
        title: Localized::new("Ecosistemas Estratégicos", "Strategic Ecosystems"),
        description: Localized::new(
            "Webs que actúan como el núcleo de tu operación comercial. Zero plantillas.",
            "Websites that act as the core of your business operation. Zero templates.",
        ),
        icon: Icon::Layers,
        tags: Localized::same(&["Performance", "SEO+", "Custom-Code"]),
    },
    Service {
        id: "02",
        title: Localized::new("Inteligencia Aplicada", "Applied Intelligence"),
        description: Localized::new(
            "Dashboards que transforman el ruido de datos en ventajas competitivas reales.",
            "Dashboards that transform data noise into real competitive advantages.",
        ),
        icon: Icon::Database,
        tags: Localized::same(&["DataViz", "Analytics", "UX"]),
    },
    Service {
        id: "03",
        title: Localized::new("Arquitectura de Flujo", "Flow Architecture"),
        description: Localized::new(
            "Integraciones profundas que eliminan la fricción operativa de tu equipo.",
            "Deep integrations that eliminate operational friction from your team.",
        ),
        icon: Icon::Workflow,
        tags: Localized::same(&["Automation", "API", "Scalable"]),
    },
];

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "01",
        title: "AETHER DATA",
        category: Category::Integration,
        label: Localized::same("Core Systems"),
        year: 2025,
        swatch: Swatch::Zinc900,
    },
    Project {
        id: "02",
        title: "ORION PLATFORM",
        category: Category::Web,
        label: Localized::same("E-Commerce OS"),
        year: 2024,
        swatch: Swatch::Onyx,
    },
    Project {
        id: "03",
        title: "SYNAPSE AI",
        category: Category::Dashboard,
        label: Localized::new("Visualización de Datos", "DataViz"),
        year: 2024,
        swatch: Swatch::Zinc950,
    },
    Project {
        id: "04",
        title: "VECTOR ARCHIVE",
        category: Category::Integration,
        label: Localized::new("Infraestructura Digital", "Digital Infra"),
        year: 2023,
        swatch: Swatch::Neutral900,
    },
    Project {
        id: "05",
        title: "NEBULA DASH",
        category: Category::Dashboard,
        label: Localized::same("BI Systems"),
        year: 2023,
        swatch: Swatch::Stone900,
    },
    Project {
        id: "06",
        title: "TITAN OS",
        category: Category::Web,
        label: Localized::same("Brand System"),
        year: 2022,
        swatch: Swatch::Zinc800,
    },
];

/// Label for a filter chip.
pub fn filter_label(category: Category) -> LocalizedStr {
    FILTERS
        .iter()
        .find(|option| option.category == category)
        .map(|option| option.label)
        .unwrap_or(Localized::same(category.tag()))
}

/// Every display string in the content table, tagged with where it comes from.
pub fn localized_strings() -> Vec<(String, LocalizedStr)> {
    let mut out = Vec::new();

    for link in &NAV_LINKS {
        out.push((format!("nav.{}", link.id), link.label));
    }

    out.extend([
        ("hero.tag".to_string(), HERO.tag),
        ("hero.title_lead".to_string(), HERO.title_lead),
        ("hero.title_outline".to_string(), HERO.title_outline),
        ("hero.title_accent".to_string(), HERO.title_accent),
        ("hero.description".to_string(), HERO.description),
        ("hero.cta".to_string(), HERO.cta),
        ("vision.label".to_string(), VISION.label),
        ("vision.title".to_string(), VISION.title),
        ("vision.description".to_string(), VISION.description),
        ("services.heading".to_string(), SERVICES_COPY.heading),
        ("services.consult".to_string(), SERVICES_COPY.consult),
        ("work.label".to_string(), WORK.label),
        ("work.title".to_string(), WORK.title),
        ("work.archive_cta".to_string(), WORK.archive_cta),
        ("philosophy.quote".to_string(), PHILOSOPHY_QUOTE),
        ("footer.tagline".to_string(), FOOTER_TAGLINE),
    ]);

    for option in &FILTERS {
        out.push((format!("filter.{}", option.category), option.label));
    }
    for service in &SERVICES {
        out.push((format!("service.{}.title", service.id), service.title));
        out.push((format!("service.{}.description", service.id), service.description));
    }
    for project in &PROJECTS {
        out.push((format!("project.{}.label", project.id), project.label));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lang::Lang;
    use std::collections::HashSet;

    #[test]
    fn every_localized_string_resolves_non_empty() {
        for (path, value) in localized_strings() {
            for lang in Lang::ALL {
                assert!(
                    !value.get(lang).trim().is_empty(),
                    "{path} is empty for {lang}"
                );
            }
        }
    }

    #[test]
    fn service_tags_exist_in_both_languages() {
        for service in &SERVICES {
            for (lang, tags) in service.tags.iter() {
                assert!(!tags.is_empty(), "service {} has no tags in {lang}", service.id);
                assert!(tags.iter().all(|t| !t.is_empty()));
            }
        }
    }

    #[test]
    fn ids_are_unique() {
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(projects.len(), PROJECTS.len());
        let services: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(services.len(), SERVICES.len());
        let links: HashSet<_> = NAV_LINKS.iter().map(|l| l.id).collect();
        assert_eq!(links.len(), NAV_LINKS.len());
    }

    #[test]
    fn projects_never_use_the_wildcard() {
        assert!(PROJECTS.iter().all(|p| !p.category.is_wildcard()));
    }

    #[test]
    fn sample_data_has_two_projects_per_category() {
        for category in [Category::Web, Category::Dashboard, Category::Integration] {
            let n = PROJECTS.iter().filter(|p| p.category == category).count();
            assert_eq!(n, 2, "{category}");
        }
    }

    #[test]
    fn nav_links_point_at_section_anchors() {
        for link in &NAV_LINKS {
            assert_eq!(link.href, format!("#{}", link.id));
        }
    }

    #[test]
    fn filter_chips_follow_category_order() {
        let order: Vec<_> = FILTERS.iter().map(|f| f.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(filter_label(Category::Web).get(Lang::Es), "Diseño Web");
    }
}
