//! User-facing cart notifications.

use std::sync::Mutex;
use tienda_cache::Language;

/// Severity, used by the UI to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Something the shopper should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum CartNotice {
    Added { name: String },
    QuantityIncreased { name: String, quantity: u32 },
    QuantityUpdated { name: String, quantity: u32 },
    InvalidQuantity,
    OutOfStock { name: String },
    InsufficientStock { name: String, available: u32 },
    StockCheckFailed { name: String },
    /// Quantity lowered to what is in stock.
    Clamped { name: String, available: u32 },
    /// Item taken out because the product is gone or sold out.
    Dropped { name: String },
    Removed { name: String },
    Cleared,
}

impl CartNotice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            CartNotice::Added { .. }
            | CartNotice::QuantityIncreased { .. }
            | CartNotice::QuantityUpdated { .. } => NoticeKind::Success,
            CartNotice::InvalidQuantity
            | CartNotice::OutOfStock { .. }
            | CartNotice::InsufficientStock { .. }
            | CartNotice::StockCheckFailed { .. } => NoticeKind::Error,
            CartNotice::Clamped { .. } | CartNotice::Dropped { .. } => NoticeKind::Warning,
            CartNotice::Removed { .. } | CartNotice::Cleared => NoticeKind::Info,
        }
    }

    /// Message text in `language`.
    pub fn message(&self, language: Language) -> String {
        match (self, language) {
            (CartNotice::Added { name }, Language::Es) => format!("{name} agregado al carrito"),
            (CartNotice::Added { name }, Language::En) => format!("{name} added to cart"),
            (CartNotice::QuantityIncreased { name, quantity }, Language::Es)
            | (CartNotice::QuantityUpdated { name, quantity }, Language::Es) => {
                format!("Cantidad de {name} actualizada a {quantity}")
            }
            (CartNotice::QuantityIncreased { name, quantity }, Language::En)
            | (CartNotice::QuantityUpdated { name, quantity }, Language::En) => {
                format!("{name} quantity updated to {quantity}")
            }
            (CartNotice::InvalidQuantity, Language::Es) => "Cantidad inválida".to_string(),
            (CartNotice::InvalidQuantity, Language::En) => "Invalid quantity".to_string(),
            (CartNotice::OutOfStock { name }, Language::Es) => format!("{name} está agotado"),
            (CartNotice::OutOfStock { name }, Language::En) => format!("{name} is out of stock"),
            (CartNotice::InsufficientStock { name, available }, Language::Es) => {
                format!("Solo hay {available} unidades disponibles de {name}")
            }
            (CartNotice::InsufficientStock { name, available }, Language::En) => {
                format!("Only {available} units of {name} available")
            }
            (CartNotice::StockCheckFailed { name }, Language::Es) => {
                format!("No se pudo verificar el stock de {name}")
            }
            (CartNotice::StockCheckFailed { name }, Language::En) => {
                format!("Could not verify stock for {name}")
            }
            (CartNotice::Clamped { name, available }, Language::Es) => {
                format!("Cantidad de {name} ajustada a {available} por stock disponible")
            }
            (CartNotice::Clamped { name, available }, Language::En) => {
                format!("{name} quantity reduced to {available} to match stock")
            }
            (CartNotice::Dropped { name }, Language::Es) => {
                format!("{name} ya no está disponible y se quitó del carrito")
            }
            (CartNotice::Dropped { name }, Language::En) => {
                format!("{name} is no longer available and was removed from your cart")
            }
            (CartNotice::Removed { name }, Language::Es) => format!("{name} eliminado del carrito"),
            (CartNotice::Removed { name }, Language::En) => format!("{name} removed from cart"),
            (CartNotice::Cleared, Language::Es) => "Carrito vaciado".to_string(),
            (CartNotice::Cleared, Language::En) => "Cart cleared".to_string(),
        }
    }
}

/// Receiver for cart notices, typically a toast layer.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: CartNotice);
}

/// Emits notices as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier {
    pub language: Language,
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: CartNotice) {
        let message = notice.message(self.language);
        match notice.kind() {
            NoticeKind::Error | NoticeKind::Warning => tracing::warn!(%message, "cart notice"),
            NoticeKind::Success | NoticeKind::Info => tracing::info!(%message, "cart notice"),
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<CartNotice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far.
    pub fn notices(&self) -> Vec<CartNotice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Drain the received notices.
    pub fn take(&self) -> Vec<CartNotice> {
        self.notices
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: CartNotice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(CartNotice::Cleared.kind(), NoticeKind::Info);
        assert_eq!(CartNotice::Dropped { name: "x".into() }.kind(), NoticeKind::Warning);
        assert_eq!(CartNotice::OutOfStock { name: "x".into() }.kind(), NoticeKind::Error);
    }

    #[test]
    fn test_bilingual_messages() {
        let notice = CartNotice::InsufficientStock {
            name: "Poncho".into(),
            available: 2,
        };
        assert_eq!(notice.message(Language::Es), "Solo hay 2 unidades disponibles de Poncho");
        assert_eq!(notice.message(Language::En), "Only 2 units of Poncho available");
    }

    #[test]
    fn test_recording_notifier_drains() {
        let notifier = RecordingNotifier::new();
        notifier.notify(CartNotice::Cleared);
        assert_eq!(notifier.notices(), vec![CartNotice::Cleared]);
        assert_eq!(notifier.take(), vec![CartNotice::Cleared]);
        assert!(notifier.notices().is_empty());
    }
}
