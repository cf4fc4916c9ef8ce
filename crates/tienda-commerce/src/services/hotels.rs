//! Hotels content: hotels grouped by destination.

use super::panel::{push_row, push_text, remove_at, replace_text, update_row, RowEdit};
use serde::{Deserialize, Serialize};

/// A hotel offered at a destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Hotel {
    pub nombre: String,
    pub precio_min: f64,
    pub precio_max: f64,
    pub estrellas: u32,
}

editable_row!(Hotel, HotelField {
    Nombre => nombre: text,
    PrecioMin => precio_min: price,
    PrecioMax => precio_max: price,
    Estrellas => estrellas: count,
});

/// A destination and its hotels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DestinoHotelero {
    pub nombre: String,
    pub hoteles: Vec<Hotel>,
}

/// Check-in and check-out policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Politicas {
    pub check_in: String,
    pub check_out: String,
}

editable_row!(Politicas, PoliticasField {
    CheckIn => check_in: text,
    CheckOut => check_out: text,
});

/// Content of a `hotels` service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HotelsContent {
    pub destinos: Vec<DestinoHotelero>,
    pub servicios_generales: Vec<String>,
    pub politicas: Politicas,
}

impl Default for HotelsContent {
    /// Starts with the common amenities listed.
    fn default() -> Self {
        Self {
            destinos: Vec::new(),
            servicios_generales: vec![
                "WiFi".to_string(),
                "Desayuno".to_string(),
                "Piscina".to_string(),
            ],
            politicas: Politicas::default(),
        }
    }
}

impl HotelsContent {
    /// Add a destination. Blank names are ignored.
    pub fn add_destino(&mut self, nombre: &str) -> bool {
        let nombre = nombre.trim();
        if nombre.is_empty() {
            return false;
        }
        self.destinos.push(DestinoHotelero {
            nombre: nombre.to_string(),
            hoteles: Vec::new(),
        });
        true
    }

    pub fn remove_destino(&mut self, index: usize) -> bool {
        remove_at(&mut self.destinos, index)
    }

    pub fn rename_destino(&mut self, index: usize, nombre: &str) -> bool {
        let nombre = nombre.trim();
        match self.destinos.get_mut(index) {
            Some(destino) if !nombre.is_empty() => {
                destino.nombre = nombre.to_string();
                true
            }
            _ => false,
        }
    }

    /// Add an empty hotel under a destination.
    pub fn add_hotel(&mut self, destino: usize) -> Option<usize> {
        self.destinos
            .get_mut(destino)
            .map(|d| push_row(&mut d.hoteles))
    }

    pub fn remove_hotel(&mut self, destino: usize, hotel: usize) -> bool {
        self.destinos
            .get_mut(destino)
            .map_or(false, |d| remove_at(&mut d.hoteles, hotel))
    }

    pub fn update_hotel(&mut self, destino: usize, hotel: usize, field: HotelField, raw: &str) -> bool {
        self.destinos
            .get_mut(destino)
            .map_or(false, |d| update_row(&mut d.hoteles, hotel, field, raw))
    }

    pub fn add_servicio(&mut self, raw: &str) -> bool {
        push_text(&mut self.servicios_generales, raw)
    }

    pub fn update_servicio(&mut self, index: usize, raw: &str) -> bool {
        replace_text(&mut self.servicios_generales, index, raw)
    }

    pub fn remove_servicio(&mut self, index: usize) -> bool {
        remove_at(&mut self.servicios_generales, index)
    }

    pub fn set_politica(&mut self, field: PoliticasField, raw: &str) {
        self.politicas.set_field(field, raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_amenities() {
        let content = HotelsContent::default();
        assert_eq!(content.servicios_generales, vec!["WiFi", "Desayuno", "Piscina"]);
        assert!(content.destinos.is_empty());
    }

    #[test]
    fn test_nested_hotels() {
        let mut content = HotelsContent::default();
        assert!(content.add_destino("Cusco"));
        assert!(!content.add_destino(" "));

        let h = content.add_hotel(0).unwrap();
        assert!(content.update_hotel(0, h, HotelField::Nombre, "Casa Andina"));
        assert!(content.update_hotel(0, h, HotelField::Estrellas, "4"));
        assert!(content.update_hotel(0, h, HotelField::PrecioMax, "210"));

        let hotel = &content.destinos[0].hoteles[0];
        assert_eq!(hotel.nombre, "Casa Andina");
        assert_eq!(hotel.estrellas, 4);
        assert_eq!(hotel.precio_max, 210.0);

        assert_eq!(content.add_hotel(5), None);
        assert!(!content.update_hotel(0, 9, HotelField::Nombre, "x"));
        assert!(!content.remove_hotel(3, 0));
        assert!(content.remove_hotel(0, 0));
    }

    #[test]
    fn test_policies() {
        let mut content = HotelsContent::default();
        content.set_politica(PoliticasField::CheckIn, "15:00");
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["politicas"]["checkIn"], "15:00");
        assert_eq!(json["politicas"]["checkOut"], "");
    }
}
