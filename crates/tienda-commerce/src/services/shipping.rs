//! Shipping content: rate tables and delivery times.

use super::panel::{push_row, push_text, remove_at, update_row, RowEdit};
use serde::{Deserialize, Serialize};

/// Overall price range shown on the shipping card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RangoPrecios {
    pub minimo: f64,
    pub maximo: f64,
}

editable_row!(RangoPrecios, RangoPreciosField {
    Minimo => minimo: price,
    Maximo => maximo: price,
});

/// Rate by parcel weight band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TarifaPeso {
    /// Weight band label, e.g. "0-1 kg".
    pub peso: String,
    pub precio_min: f64,
    pub precio_max: f64,
    pub tiempo: String,
}

editable_row!(TarifaPeso, TarifaPesoField {
    Peso => peso: text,
    PrecioMin => precio_min: price,
    PrecioMax => precio_max: price,
    Tiempo => tiempo: text,
});

/// Rate by destination country.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TarifaDestino {
    pub pais: String,
    pub precio_min: f64,
    pub precio_max: f64,
    pub tiempo: String,
}

editable_row!(TarifaDestino, TarifaDestinoField {
    Pais => pais: text,
    PrecioMin => precio_min: price,
    PrecioMax => precio_max: price,
    Tiempo => tiempo: text,
});

/// Delivery time per service level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TiemposEntrega {
    pub nacional: String,
    pub internacional: String,
    pub express: String,
}

editable_row!(TiemposEntrega, TiemposEntregaField {
    Nacional => nacional: text,
    Internacional => internacional: text,
    Express => express: text,
});

/// Which category list to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryList {
    Permitidas,
    Restringidas,
}

/// Content of a `shipping` service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShippingContent {
    pub rango_precios: RangoPrecios,
    pub categorias_permitidas: Vec<String>,
    pub categorias_restringidas: Vec<String>,
    pub tarifas_por_peso: Vec<TarifaPeso>,
    pub tarifas_por_destino: Vec<TarifaDestino>,
    pub tiempos_entrega: TiemposEntrega,
}

impl ShippingContent {
    pub fn set_rango_precios(&mut self, field: RangoPreciosField, raw: &str) {
        self.rango_precios.set_field(field, raw);
    }

    fn categories(&mut self, list: CategoryList) -> &mut Vec<String> {
        match list {
            CategoryList::Permitidas => &mut self.categorias_permitidas,
            CategoryList::Restringidas => &mut self.categorias_restringidas,
        }
    }

    pub fn add_categoria(&mut self, list: CategoryList, raw: &str) -> bool {
        push_text(self.categories(list), raw)
    }

    pub fn remove_categoria(&mut self, list: CategoryList, index: usize) -> bool {
        remove_at(self.categories(list), index)
    }

    pub fn add_tarifa_peso(&mut self) -> usize {
        push_row(&mut self.tarifas_por_peso)
    }

    pub fn remove_tarifa_peso(&mut self, index: usize) -> bool {
        remove_at(&mut self.tarifas_por_peso, index)
    }

    pub fn update_tarifa_peso(&mut self, index: usize, field: TarifaPesoField, raw: &str) -> bool {
        update_row(&mut self.tarifas_por_peso, index, field, raw)
    }

    pub fn add_tarifa_destino(&mut self) -> usize {
        push_row(&mut self.tarifas_por_destino)
    }

    pub fn remove_tarifa_destino(&mut self, index: usize) -> bool {
        remove_at(&mut self.tarifas_por_destino, index)
    }

    pub fn update_tarifa_destino(
        &mut self,
        index: usize,
        field: TarifaDestinoField,
        raw: &str,
    ) -> bool {
        update_row(&mut self.tarifas_por_destino, index, field, raw)
    }

    pub fn set_tiempo_entrega(&mut self, field: TiemposEntregaField, raw: &str) {
        self.tiempos_entrega.set_field(field, raw);
    }
}
