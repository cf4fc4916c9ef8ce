//! Flights content: routes with per-airline offers, cabin classes and
//! baggage rules.

use super::panel::{push_row, push_text, remove_at, update_row, RowEdit};
use serde::{Deserialize, Serialize};

/// Headline fares.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RangoPreciosVuelo {
    pub minimo: f64,
    pub maximo: f64,
    pub promedio: f64,
}

editable_row!(RangoPreciosVuelo, RangoPreciosVueloField {
    Minimo => minimo: price,
    Maximo => maximo: price,
    Promedio => promedio: price,
});

/// One airline's offer on a route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Vuelo {
    pub aerolinea: String,
    pub clase: String,
    pub precio_min: f64,
    pub precio_max: f64,
    pub horario: String,
    pub equipaje: String,
    pub comida: String,
    pub beneficios: Vec<String>,
}

editable_row!(Vuelo, VueloField {
    Aerolinea => aerolinea: text,
    Clase => clase: text,
    PrecioMin => precio_min: price,
    PrecioMax => precio_max: price,
    Horario => horario: text,
    Equipaje => equipaje: text,
    Comida => comida: text,
});

/// An origin/destination pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ruta {
    pub origen: String,
    pub destino: String,
    pub duracion: String,
    pub vuelos: Vec<Vuelo>,
}

editable_row!(Ruta, RutaField {
    Origen => origen: text,
    Destino => destino: text,
    Duracion => duracion: text,
});

/// A cabin class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Clase {
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub beneficios: Vec<String>,
}

editable_row!(Clase, ClaseField {
    Nombre => nombre: text,
    Precio => precio: price,
    Descripcion => descripcion: text,
});

/// Baggage allowance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Equipaje {
    pub cabina: String,
    pub bodega: String,
    pub precio_extra: f64,
}

editable_row!(Equipaje, EquipajeField {
    Cabina => cabina: text,
    Bodega => bodega: text,
    PrecioExtra => precio_extra: price,
});

/// A highlighted destination on the flights page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DestinoPopular {
    pub ciudad: String,
    pub precio: f64,
    /// Frequency label, e.g. "Diarios".
    pub vuelos: String,
}

editable_row!(DestinoPopular, DestinoPopularField {
    Ciudad => ciudad: text,
    Precio => precio: price,
    Vuelos => vuelos: text,
});

/// Content of a `flights` service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlightsContent {
    pub rango_precios: RangoPreciosVuelo,
    pub rutas: Vec<Ruta>,
    pub clases: Vec<Clase>,
    pub aerolineas: Vec<String>,
    pub equipaje: Equipaje,
    pub destinos_populares: Vec<DestinoPopular>,
}

impl FlightsContent {
    pub fn set_rango(&mut self, field: RangoPreciosVueloField, raw: &str) {
        self.rango_precios.set_field(field, raw);
    }

    pub fn add_ruta(&mut self) -> usize {
        push_row(&mut self.rutas)
    }

    pub fn remove_ruta(&mut self, index: usize) -> bool {
        remove_at(&mut self.rutas, index)
    }

    pub fn update_ruta(&mut self, index: usize, field: RutaField, raw: &str) -> bool {
        update_row(&mut self.rutas, index, field, raw)
    }

    /// Add an empty offer to a route.
    pub fn add_vuelo(&mut self, ruta: usize) -> Option<usize> {
        self.rutas.get_mut(ruta).map(|r| push_row(&mut r.vuelos))
    }

    pub fn remove_vuelo(&mut self, ruta: usize, vuelo: usize) -> bool {
        self.rutas
            .get_mut(ruta)
            .map_or(false, |r| remove_at(&mut r.vuelos, vuelo))
    }

    pub fn update_vuelo(&mut self, ruta: usize, vuelo: usize, field: VueloField, raw: &str) -> bool {
        self.rutas
            .get_mut(ruta)
            .map_or(false, |r| update_row(&mut r.vuelos, vuelo, field, raw))
    }

    pub fn add_beneficio_vuelo(&mut self, ruta: usize, vuelo: usize, raw: &str) -> bool {
        self.rutas
            .get_mut(ruta)
            .and_then(|r| r.vuelos.get_mut(vuelo))
            .map_or(false, |v| push_text(&mut v.beneficios, raw))
    }

    pub fn remove_beneficio_vuelo(&mut self, ruta: usize, vuelo: usize, index: usize) -> bool {
        self.rutas
            .get_mut(ruta)
            .and_then(|r| r.vuelos.get_mut(vuelo))
            .map_or(false, |v| remove_at(&mut v.beneficios, index))
    }

    pub fn add_clase(&mut self) -> usize {
        push_row(&mut self.clases)
    }

    pub fn remove_clase(&mut self, index: usize) -> bool {
        remove_at(&mut self.clases, index)
    }

    pub fn update_clase(&mut self, index: usize, field: ClaseField, raw: &str) -> bool {
        update_row(&mut self.clases, index, field, raw)
    }

    pub fn add_beneficio_clase(&mut self, clase: usize, raw: &str) -> bool {
        self.clases
            .get_mut(clase)
            .map_or(false, |c| push_text(&mut c.beneficios, raw))
    }

    pub fn remove_beneficio_clase(&mut self, clase: usize, index: usize) -> bool {
        self.clases
            .get_mut(clase)
            .map_or(false, |c| remove_at(&mut c.beneficios, index))
    }

    pub fn add_aerolinea(&mut self, raw: &str) -> bool {
        push_text(&mut self.aerolineas, raw)
    }

    pub fn remove_aerolinea(&mut self, index: usize) -> bool {
        remove_at(&mut self.aerolineas, index)
    }

    pub fn set_equipaje(&mut self, field: EquipajeField, raw: &str) {
        self.equipaje.set_field(field, raw);
    }

    pub fn add_destino_popular(&mut self) -> usize {
        push_row(&mut self.destinos_populares)
    }

    pub fn remove_destino_popular(&mut self, index: usize) -> bool {
        remove_at(&mut self.destinos_populares, index)
    }

    pub fn update_destino_popular(
        &mut self,
        index: usize,
        field: DestinoPopularField,
        raw: &str,
    ) -> bool {
        update_row(&mut self.destinos_populares, index, field, raw)
    }
}
