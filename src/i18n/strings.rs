//! Localized site copy and URL slugs.
//!
//! Plain static data. Lookup and fallback live in `catalog`.

use crate::i18n::catalog::Entry;

// ==================== Messages ====================

/// Every user-facing string shared across pages.
pub const MESSAGES: &[Entry] = &[
    // Navigation
    ("nav.home", &[("en", "Home"), ("de", "Startseite"), ("it", "Home")]),
    (
        "nav.services",
        &[("en", "Services"), ("de", "Dienstleistungen"), ("it", "Servizi")],
    ),
    (
        "nav.contact",
        &[("en", "Contact"), ("de", "Kontakt"), ("it", "Contatto")],
    ),
    (
        "nav.locations",
        &[("en", "Locations"), ("de", "Standorte"), ("it", "Sedi")],
    ),
    // Services
    (
        "services.ai_integration",
        &[
            ("en", "AI Integration & Automation"),
            ("de", "KI-Integration & Automatisierung"),
            ("it", "Integrazione e automazione AI"),
        ],
    ),
    (
        "services.ai_coaching",
        &[
            ("en", "AI Coaching & Transformation"),
            ("de", "KI-Coaching & Transformation"),
            ("it", "Coaching e trasformazione AI"),
        ],
    ),
    (
        "services.product_development",
        &[
            ("en", "Product & Service Development"),
            ("de", "Produkt- & Serviceentwicklung"),
            ("it", "Sviluppo di prodotti e servizi"),
        ],
    ),
    (
        "services.workshops",
        &[
            ("en", "Workshops & Education"),
            ("de", "Workshops & Bildung"),
            ("it", "Workshop e formazione"),
        ],
    ),
    // Locations
    (
        "locations.germany",
        &[("en", "Germany"), ("de", "Deutschland"), ("it", "Germania")],
    ),
    (
        "locations.italy",
        &[("en", "Italy"), ("de", "Italien"), ("it", "Italia")],
    ),
    (
        "locations.uk",
        &[
            ("en", "United Kingdom"),
            ("de", "Vereinigtes Königreich"),
            ("it", "Regno Unito"),
        ],
    ),
    (
        "locations.us",
        &[
            ("en", "United States"),
            ("de", "Vereinigte Staaten"),
            ("it", "Stati Uniti"),
        ],
    ),
    (
        "locations.spain",
        &[("en", "Spain"), ("de", "Spanien"), ("it", "Spagna")],
    ),
    // Common
    (
        "common.learn_more",
        &[("en", "Learn More"), ("de", "Mehr erfahren"), ("it", "Scopri di più")],
    ),
    (
        "common.contact_us",
        &[("en", "Contact Us"), ("de", "Kontaktiere uns"), ("it", "Contattaci")],
    ),
    (
        "common.get_started",
        &[("en", "Get Started"), ("de", "Loslegen"), ("it", "Inizia ora")],
    ),
    // Homepage
    (
        "home.hero.title",
        &[
            ("en", "AI Transformation for Your Business"),
            ("de", "KI-Transformation für Ihr Unternehmen"),
            ("it", "Trasformazione AI per la tua azienda"),
        ],
    ),
    (
        "home.hero.subtitle",
        &[
            ("en", "Empowering creators with cutting-edge AI solutions"),
            ("de", "Wir stärken Kreative mit modernsten KI-Lösungen"),
            ("it", "Potenziamo i creatori con soluzioni AI all'avanguardia"),
        ],
    ),
    // Page metadata
    (
        "meta.title",
        &[
            ("en", "grait.io | AI Transformation Agency"),
            ("de", "grait.io | KI-Transformationsagentur"),
            ("it", "grait.io | Agenzia di Trasformazione AI"),
        ],
    ),
    (
        "meta.description",
        &[
            (
                "en",
                "Premium AI integration and coaching agency for business transformation",
            ),
            (
                "de",
                "Premium KI-Integrations- und Coaching-Agentur für Unternehmenstransformation",
            ),
            (
                "it",
                "Agenzia premium di integrazione e coaching AI per la trasformazione aziendale",
            ),
        ],
    ),
    // Footer
    (
        "footer.rights",
        &[
            ("en", "All rights reserved"),
            ("de", "Alle Rechte vorbehalten"),
            ("it", "Tutti i diritti riservati"),
        ],
    ),
];

// ==================== Slugs ====================

/// URL-safe, localized slugs keyed by the same keys as [`MESSAGES`].
pub const SLUGS: &[Entry] = &[
    (
        "services.ai_integration",
        &[("en", "ai-integration"), ("de", "ki-integration"), ("it", "integrazione-ai")],
    ),
    (
        "services.ai_coaching",
        &[("en", "ai-coaching"), ("de", "ki-coaching"), ("it", "coaching-ai")],
    ),
    (
        "services.product_development",
        &[
            ("en", "product-development"),
            ("de", "produktentwicklung"),
            ("it", "sviluppo-prodotti"),
        ],
    ),
    (
        "services.workshops",
        &[("en", "workshops"), ("de", "workshops"), ("it", "workshop")],
    ),
    (
        "locations.germany",
        &[("en", "germany"), ("de", "deutschland"), ("it", "germania")],
    ),
    (
        "locations.italy",
        &[("en", "italy"), ("de", "italien"), ("it", "italia")],
    ),
    (
        "locations.uk",
        &[
            ("en", "united-kingdom"),
            ("de", "vereinigtes-koenigreich"),
            ("it", "regno-unito"),
        ],
    ),
    (
        "locations.us",
        &[
            ("en", "united-states"),
            ("de", "vereinigte-staaten"),
            ("it", "stati-uniti"),
        ],
    ),
    (
        "locations.spain",
        &[("en", "spain"), ("de", "spanien"), ("it", "spagna")],
    ),
];
