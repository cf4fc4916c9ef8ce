//! Service content registry.
//!
//! A service's `content` has a different shape for each [`ServiceType`].
//! [`ServiceContent`] carries the typed payload for exactly one type, and
//! this module owns the canonical starting value for each.

use super::{
    FlightsContent, HotelsContent, RentalContent, ServiceType, ShippingContent, ToursContent,
    VisasContent,
};
use crate::CommerceError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Typed `content` of a service, one variant per [`ServiceType`].
///
/// Serializes as the bare payload object; the type tag lives beside it in
/// the service document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceContent {
    Shipping(ShippingContent),
    Tours(ToursContent),
    Rental(RentalContent),
    Hotels(HotelsContent),
    Flights(FlightsContent),
    Visas(VisasContent),
}

impl ServiceContent {
    /// The type this content belongs to.
    pub fn service_type(&self) -> ServiceType {
        match self {
            ServiceContent::Shipping(_) => ServiceType::Shipping,
            ServiceContent::Tours(_) => ServiceType::Tours,
            ServiceContent::Rental(_) => ServiceType::Rental,
            ServiceContent::Hotels(_) => ServiceType::Hotels,
            ServiceContent::Flights(_) => ServiceType::Flights,
            ServiceContent::Visas(_) => ServiceType::Visas,
        }
    }

    /// Decode a stored `content` object for `service_type`.
    ///
    /// Strict: missing or unknown keys are an integrity error.
    pub fn from_parts(service_type: ServiceType, value: Value) -> Result<Self, CommerceError> {
        let invalid = |e: serde_json::Error| CommerceError::InvalidContent {
            service_type: service_type.to_string(),
            reason: e.to_string(),
        };

        let content = match service_type {
            ServiceType::Shipping => {
                ServiceContent::Shipping(serde_json::from_value(value).map_err(invalid)?)
            }
            ServiceType::Tours => {
                ServiceContent::Tours(serde_json::from_value(value).map_err(invalid)?)
            }
            ServiceType::Rental => {
                ServiceContent::Rental(serde_json::from_value(value).map_err(invalid)?)
            }
            ServiceType::Hotels => {
                ServiceContent::Hotels(serde_json::from_value(value).map_err(invalid)?)
            }
            ServiceType::Flights => {
                ServiceContent::Flights(serde_json::from_value(value).map_err(invalid)?)
            }
            ServiceType::Visas => {
                ServiceContent::Visas(serde_json::from_value(value).map_err(invalid)?)
            }
        };
        Ok(content)
    }

    /// The payload as a JSON object.
    pub fn to_value(&self) -> Result<Value, CommerceError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Canonical starting content for `service_type`.
///
/// Lists start empty except the rental rate plans and the hotel amenities.
pub fn initial_content(service_type: ServiceType) -> ServiceContent {
    match service_type {
        ServiceType::Shipping => ServiceContent::Shipping(ShippingContent::default()),
        ServiceType::Tours => ServiceContent::Tours(ToursContent::default()),
        ServiceType::Rental => ServiceContent::Rental(RentalContent::default()),
        ServiceType::Hotels => ServiceContent::Hotels(HotelsContent::default()),
        ServiceType::Flights => ServiceContent::Flights(FlightsContent::default()),
        ServiceType::Visas => ServiceContent::Visas(VisasContent::default()),
    }
}

/// Starting content for a raw type token, as JSON.
///
/// An unrecognised token yields an empty object rather than an error.
pub fn initial_structure(token: &str) -> Value {
    let Some(service_type) = ServiceType::from_str(token) else {
        tracing::debug!(token, "unknown service type, using empty content");
        return Value::Object(Map::new());
    };

    match initial_content(service_type).to_value() {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(%service_type, error = %e, "failed to render initial content");
            Value::Object(Map::new())
        }
    }
}
