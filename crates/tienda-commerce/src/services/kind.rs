//! The closed set of service types.

use serde::{Deserialize, Serialize};
use std::fmt;
use tienda_cache::Language;

/// Kind of tourism service. Fixed when the service is created; selects the
/// shape of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Shipping,
    Tours,
    Rental,
    Hotels,
    Flights,
    Visas,
}

impl ServiceType {
    /// Every type, in admin menu order.
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Shipping,
        ServiceType::Tours,
        ServiceType::Rental,
        ServiceType::Hotels,
        ServiceType::Flights,
        ServiceType::Visas,
    ];

    /// Wire token stored in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Shipping => "shipping",
            ServiceType::Tours => "tours",
            ServiceType::Rental => "rental",
            ServiceType::Hotels => "hotels",
            ServiceType::Flights => "flights",
            ServiceType::Visas => "visas",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "shipping" => Some(ServiceType::Shipping),
            "tours" => Some(ServiceType::Tours),
            "rental" => Some(ServiceType::Rental),
            "hotels" => Some(ServiceType::Hotels),
            "flights" => Some(ServiceType::Flights),
            "visas" => Some(ServiceType::Visas),
            _ => None,
        }
    }

    /// Display name in the storefront language.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (ServiceType::Shipping, Language::Es) => "Envíos",
            (ServiceType::Shipping, Language::En) => "Shipping",
            (ServiceType::Tours, Language::Es) => "Tours",
            (ServiceType::Tours, Language::En) => "Tours",
            (ServiceType::Rental, Language::Es) => "Alquiler de Autos",
            (ServiceType::Rental, Language::En) => "Car Rental",
            (ServiceType::Hotels, Language::Es) => "Hoteles",
            (ServiceType::Hotels, Language::En) => "Hotels",
            (ServiceType::Flights, Language::Es) => "Vuelos",
            (ServiceType::Flights, Language::En) => "Flights",
            (ServiceType::Visas, Language::Es) => "Visas",
            (ServiceType::Visas, Language::En) => "Visas",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
