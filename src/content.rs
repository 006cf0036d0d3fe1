//! Services and locations the site has pages for.

use crate::i18n::{localized_slug, translate, Language};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub translation_key: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub translation_key: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "ai_integration",
        translation_key: "services.ai_integration",
        icon: "integration",
    },
    Service {
        id: "ai_coaching",
        translation_key: "services.ai_coaching",
        icon: "coaching",
    },
    Service {
        id: "product_development",
        translation_key: "services.product_development",
        icon: "product",
    },
    Service {
        id: "workshops",
        translation_key: "services.workshops",
        icon: "workshop",
    },
];

pub const LOCATIONS: &[Location] = &[
    Location {
        id: "germany",
        translation_key: "locations.germany",
    },
    Location {
        id: "italy",
        translation_key: "locations.italy",
    },
    Location {
        id: "uk",
        translation_key: "locations.uk",
    },
    Location {
        id: "us",
        translation_key: "locations.us",
    },
    Location {
        id: "spain",
        translation_key: "locations.spain",
    },
];

impl Service {
    pub fn find(id: &str) -> Option<&'static Service> {
        SERVICES.iter().find(|service| service.id == id)
    }

    pub fn title(&self, language: Language) -> &'static str {
        translate(self.translation_key, language.code())
    }

    pub fn slug(&self, language: Language) -> &'static str {
        localized_slug(self.translation_key, language.code())
    }
}

impl Location {
    pub fn find(id: &str) -> Option<&'static Location> {
        LOCATIONS.iter().find(|location| location.id == id)
    }

    pub fn title(&self, language: Language) -> &'static str {
        translate(self.translation_key, language.code())
    }

    pub fn slug(&self, language: Language) -> &'static str {
        localized_slug(self.translation_key, language.code())
    }
}

/// Every service/location combination that has a landing page.
pub fn service_location_pairs() -> impl Iterator<Item = (&'static Service, &'static Location)> {
    SERVICES
        .iter()
        .flat_map(|service| LOCATIONS.iter().map(move |location| (service, location)))
}
