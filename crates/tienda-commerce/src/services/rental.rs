//! Car rental content: price tiers, branches, fleet and rate plans.

use super::panel::{push_row, push_text, remove_at, update_row, RowEdit};
use serde::{Deserialize, Serialize};

/// Daily price range per vehicle tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RangosPrecios {
    pub economico_min: f64,
    pub economico_max: f64,
    pub intermedio_min: f64,
    pub intermedio_max: f64,
    pub premium_min: f64,
    pub premium_max: f64,
}

editable_row!(RangosPrecios, RangosPreciosField {
    EconomicoMin => economico_min: price,
    EconomicoMax => economico_max: price,
    IntermedioMin => intermedio_min: price,
    IntermedioMax => intermedio_max: price,
    PremiumMin => premium_min: price,
    PremiumMax => premium_max: price,
});

/// A pickup branch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Sucursal {
    pub ciudad: String,
    pub direccion: String,
    pub telefono: String,
}

editable_row!(Sucursal, SucursalField {
    Ciudad => ciudad: text,
    Direccion => direccion: text,
    Telefono => telefono: text,
});

/// A vehicle offered for rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Vehiculo {
    pub nombre: String,
    pub categoria: String,
    pub precio_min: f64,
    pub precio_max: f64,
    pub disponible: bool,
    pub transmision: String,
    pub combustible: String,
    pub pasajeros: u32,
    /// Image reference (data URI or URL).
    pub imagen: String,
}

impl Default for Vehiculo {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            categoria: String::new(),
            precio_min: 0.0,
            precio_max: 0.0,
            disponible: true,
            transmision: String::new(),
            combustible: String::new(),
            pasajeros: 0,
            imagen: String::new(),
        }
    }
}

editable_row!(Vehiculo, VehiculoField {
    Nombre => nombre: text,
    Categoria => categoria: text,
    PrecioMin => precio_min: price,
    PrecioMax => precio_max: price,
    Disponible => disponible: flag,
    Transmision => transmision: text,
    Combustible => combustible: text,
    Pasajeros => pasajeros: count,
    Imagen => imagen: text,
});

/// A rate plan with its discount percentage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tarifa {
    pub tipo: String,
    pub descuento: u8,
}

impl Tarifa {
    pub fn new(tipo: impl Into<String>, descuento: u8) -> Self {
        Self {
            tipo: tipo.into(),
            descuento,
        }
    }
}

editable_row!(Tarifa, TarifaField {
    Tipo => tipo: text,
    Descuento => descuento: percent,
});

/// Which free-text list to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalList {
    Seguros,
    Requisitos,
}

/// Content of a `rental` service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RentalContent {
    pub rangos_precios: RangosPrecios,
    pub sucursales: Vec<Sucursal>,
    pub vehiculos: Vec<Vehiculo>,
    pub tarifas: Vec<Tarifa>,
    pub seguros: Vec<String>,
    pub requisitos: Vec<String>,
}

impl Default for RentalContent {
    /// Starts with the daily, weekly and monthly plans.
    fn default() -> Self {
        Self {
            rangos_precios: RangosPrecios::default(),
            sucursales: Vec::new(),
            vehiculos: Vec::new(),
            tarifas: vec![
                Tarifa::new("Diaria", 0),
                Tarifa::new("Semanal", 15),
                Tarifa::new("Mensual", 30),
            ],
            seguros: Vec::new(),
            requisitos: Vec::new(),
        }
    }
}

impl RentalContent {
    pub fn set_rango(&mut self, field: RangosPreciosField, raw: &str) {
        self.rangos_precios.set_field(field, raw);
    }

    pub fn add_sucursal(&mut self) -> usize {
        push_row(&mut self.sucursales)
    }

    pub fn remove_sucursal(&mut self, index: usize) -> bool {
        remove_at(&mut self.sucursales, index)
    }

    pub fn update_sucursal(&mut self, index: usize, field: SucursalField, raw: &str) -> bool {
        update_row(&mut self.sucursales, index, field, raw)
    }

    pub fn add_vehiculo(&mut self) -> usize {
        push_row(&mut self.vehiculos)
    }

    pub fn remove_vehiculo(&mut self, index: usize) -> bool {
        remove_at(&mut self.vehiculos, index)
    }

    pub fn update_vehiculo(&mut self, index: usize, field: VehiculoField, raw: &str) -> bool {
        update_row(&mut self.vehiculos, index, field, raw)
    }

    pub fn add_tarifa(&mut self) -> usize {
        push_row(&mut self.tarifas)
    }

    pub fn remove_tarifa(&mut self, index: usize) -> bool {
        remove_at(&mut self.tarifas, index)
    }

    pub fn update_tarifa(&mut self, index: usize, field: TarifaField, raw: &str) -> bool {
        update_row(&mut self.tarifas, index, field, raw)
    }

    fn list_mut(&mut self, list: RentalList) -> &mut Vec<String> {
        match list {
            RentalList::Seguros => &mut self.seguros,
            RentalList::Requisitos => &mut self.requisitos,
        }
    }

    pub fn add_item(&mut self, list: RentalList, raw: &str) -> bool {
        push_text(self.list_mut(list), raw)
    }

    pub fn remove_item(&mut self, list: RentalList, index: usize) -> bool {
        remove_at(self.list_mut(list), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rate_plans() {
        let content = RentalContent::default();
        let plans: Vec<(&str, u8)> = content
            .tarifas
            .iter()
            .map(|t| (t.tipo.as_str(), t.descuento))
            .collect();
        assert_eq!(plans, vec![("Diaria", 0), ("Semanal", 15), ("Mensual", 30)]);
    }

    #[test]
    fn test_vehicle_editing() {
        let mut content = RentalContent::default();
        let i = content.add_vehiculo();
        assert!(content.vehiculos[i].disponible);

        content.update_vehiculo(i, VehiculoField::Nombre, "Toyota Yaris");
        content.update_vehiculo(i, VehiculoField::Pasajeros, "5");
        content.update_vehiculo(i, VehiculoField::PrecioMin, "35.5");
        content.update_vehiculo(i, VehiculoField::Disponible, "no");

        let v = &content.vehiculos[0];
        assert_eq!(v.nombre, "Toyota Yaris");
        assert_eq!(v.pasajeros, 5);
        assert_eq!(v.precio_min, 35.5);
        assert!(!v.disponible);
    }

    #[test]
    fn test_discount_clamped() {
        let mut content = RentalContent::default();
        assert!(content.update_tarifa(2, TarifaField::Descuento, "140"));
        assert_eq!(content.tarifas[2].descuento, 100);
        assert!(!content.update_tarifa(3, TarifaField::Descuento, "10"));
    }

    #[test]
    fn test_text_lists() {
        let mut content = RentalContent::default();
        content.add_item(RentalList::Requisitos, "Licencia vigente");
        content.add_item(RentalList::Seguros, "Cobertura total");
        assert_eq!(content.requisitos, vec!["Licencia vigente"]);
        assert!(content.remove_item(RentalList::Seguros, 0));
        assert!(content.seguros.is_empty());
    }
}
