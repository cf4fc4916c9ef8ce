//! Tours content: four free-text lists.

use super::panel::{push_text, remove_at, replace_text};
use serde::{Deserialize, Serialize};

/// Which tours list to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourList {
    Destinos,
    Incluye,
    NoIncluye,
    Recomendaciones,
}

/// Content of a `tours` service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToursContent {
    pub destinos: Vec<String>,
    pub incluye: Vec<String>,
    pub no_incluye: Vec<String>,
    pub recomendaciones: Vec<String>,
}

impl ToursContent {
    pub fn list(&self, list: TourList) -> &[String] {
        match list {
            TourList::Destinos => &self.destinos,
            TourList::Incluye => &self.incluye,
            TourList::NoIncluye => &self.no_incluye,
            TourList::Recomendaciones => &self.recomendaciones,
        }
    }

    fn list_mut(&mut self, list: TourList) -> &mut Vec<String> {
        match list {
            TourList::Destinos => &mut self.destinos,
            TourList::Incluye => &mut self.incluye,
            TourList::NoIncluye => &mut self.no_incluye,
            TourList::Recomendaciones => &mut self.recomendaciones,
        }
    }

    pub fn add(&mut self, list: TourList, raw: &str) -> bool {
        push_text(self.list_mut(list), raw)
    }

    pub fn remove(&mut self, list: TourList, index: usize) -> bool {
        remove_at(self.list_mut(list), index)
    }

    pub fn update(&mut self, list: TourList, index: usize, raw: &str) -> bool {
        replace_text(self.list_mut(list), index, raw)
    }
}
