//! Visas content: countries, requirements and processing times.

use super::panel::{push_row, push_text, remove_at, update_row, RowEdit};
use serde::{Deserialize, Serialize};

/// Visa processing offer for one country.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Pais {
    pub nombre: String,
    pub precio_min: f64,
    pub precio_max: f64,
    pub tiempo: String,
}

editable_row!(Pais, PaisField {
    Nombre => nombre: text,
    PrecioMin => precio_min: price,
    PrecioMax => precio_max: price,
    Tiempo => tiempo: text,
});

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TiemposProcesamiento {
    pub minimo: String,
    pub promedio: String,
    pub maximo: String,
}

editable_row!(TiemposProcesamiento, TiemposProcesamientoField {
    Minimo => minimo: text,
    Promedio => promedio: text,
    Maximo => maximo: text,
});

/// Which free-text list to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaList {
    Requisitos,
    Documentos,
}

/// Content of a `visas` service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VisasContent {
    pub paises: Vec<Pais>,
    pub requisitos: Vec<String>,
    pub documentos: Vec<String>,
    pub tiempos_procesamiento: TiemposProcesamiento,
}

impl VisasContent {
    pub fn add_pais(&mut self) -> usize {
        push_row(&mut self.paises)
    }

    pub fn remove_pais(&mut self, index: usize) -> bool {
        remove_at(&mut self.paises, index)
    }

    pub fn update_pais(&mut self, index: usize, field: PaisField, raw: &str) -> bool {
        update_row(&mut self.paises, index, field, raw)
    }

    fn list_mut(&mut self, list: VisaList) -> &mut Vec<String> {
        match list {
            VisaList::Requisitos => &mut self.requisitos,
            VisaList::Documentos => &mut self.documentos,
        }
    }

    pub fn add_item(&mut self, list: VisaList, raw: &str) -> bool {
        push_text(self.list_mut(list), raw)
    }

    pub fn remove_item(&mut self, list: VisaList, index: usize) -> bool {
        remove_at(self.list_mut(list), index)
    }

    pub fn set_tiempo(&mut self, field: TiemposProcesamientoField, raw: &str) {
        self.tiempos_procesamiento.set_field(field, raw);
    }
}
