//! Tourism services and their per-type content.
//!
//! Each [`ServiceType`] has its own content payload with panel editing
//! methods on it. [`ServiceContent`] ties a payload to its type, and
//! [`ServiceForm`] assembles full records for the repository.

#[macro_use]
mod panel;

mod content;
mod flights;
mod form;
mod hotels;
mod kind;
mod record;
mod rental;
mod shipping;
mod tours;
mod visas;

pub use content::{initial_content, initial_structure, ServiceContent};
pub use flights::{
    Clase, ClaseField, DestinoPopular, DestinoPopularField, Equipaje, EquipajeField,
    FlightsContent, RangoPreciosVuelo, RangoPreciosVueloField, Ruta, RutaField, Vuelo, VueloField,
};
pub use form::{ServiceForm, SERVICE_IMAGE_FOLDER};
pub use hotels::{DestinoHotelero, Hotel, HotelField, HotelsContent, Politicas, PoliticasField};
pub use kind::ServiceType;
pub use panel::RowEdit;
pub use record::{NewService, Service, ServicePatch};
pub use rental::{
    RangosPrecios, RangosPreciosField, RentalContent, RentalList, Sucursal, SucursalField, Tarifa,
    TarifaField, Vehiculo, VehiculoField,
};
pub use shipping::{
    CategoryList, RangoPrecios, RangoPreciosField, ShippingContent, TarifaDestino,
    TarifaDestinoField, TarifaPeso, TarifaPesoField, TiemposEntrega, TiemposEntregaField,
};
pub use tours::{TourList, ToursContent};
pub use visas::{
    Pais, PaisField, TiemposProcesamiento, TiemposProcesamientoField, VisaList, VisasContent,
};
