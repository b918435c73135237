// model/mod.rs - Shared data models and UI state machines
//
// These types are used by the frontend components, the HTTP client and
// (for the wire shapes) the REST API server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiError;

/// A product as served by the read endpoint.
///
/// Deserialized strictly: all four fields must be present. Extra fields
/// in the response are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// The payload sent to the write endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// The price text could not be parsed into a finite number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("price field {0:?} is not a finite number")]
pub struct InvalidPrice(pub String);

impl NewProduct {
    /// Builds the submission payload from raw form field text.
    ///
    /// Fails closed on price text that does not parse into a finite
    /// number, instead of forwarding NaN to the endpoint.
    pub fn from_fields(name: &str, price: &str) -> Result<Self, InvalidPrice> {
        let parsed: f64 = price
            .trim()
            .parse()
            .map_err(|_| InvalidPrice(price.to_owned()))?;
        if !parsed.is_finite() {
            return Err(InvalidPrice(price.to_owned()));
        }
        Ok(Self {
            name: name.to_owned(),
            price: parsed,
        })
    }
}

/// One page of the product listing as returned by the read endpoint.
///
/// `products` is required; the window fields default when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

/// How a submission attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The endpoint answered, but not with a success status.
    Rejected,
    /// The request never completed (network failure, CORS).
    Transport,
}

/// Lifecycle of a submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureKind),
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }

    /// Next phase once the write call settles.
    ///
    /// `None` means the attempt was aborted and the machine must not
    /// advance.
    pub fn after_submit(outcome: &Result<(), ApiError>) -> Option<SubmitPhase> {
        match outcome {
            Ok(()) => Some(SubmitPhase::Succeeded),
            Err(ApiError::Aborted) => None,
            Err(ApiError::Transport(_)) => Some(SubmitPhase::Failed(FailureKind::Transport)),
            Err(_) => Some(SubmitPhase::Failed(FailureKind::Rejected)),
        }
    }

    /// Whether the form fields reset on entering this phase.
    pub fn clears_fields(&self) -> bool {
        matches!(self, SubmitPhase::Succeeded)
    }

    /// User-facing status line, when there is one.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle | SubmitPhase::Submitting => None,
            SubmitPhase::Succeeded => Some("Producto agregado con éxito ✅"),
            SubmitPhase::Failed(FailureKind::Rejected) => Some("Error al agregar producto ❌"),
            SubmitPhase::Failed(FailureKind::Transport) => Some("Error de red o CORS 🚫"),
        }
    }
}

/// Lifecycle of the product listing.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Product>),
    Errored,
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// Next state once the read call settles. `None` means aborted.
    ///
    /// Every failure collapses into `Errored`; the caller logs the
    /// detail before handing the outcome over.
    pub fn after_load(outcome: Result<ProductPage, ApiError>) -> Option<ListState> {
        match outcome {
            Ok(page) => Some(ListState::Loaded(page.products)),
            Err(ApiError::Aborted) => None,
            Err(_) => Some(ListState::Errored),
        }
    }

    /// Products to render, in server order. Empty unless a page loaded.
    pub fn products(&self) -> &[Product] {
        match self {
            ListState::Loaded(products) => products,
            _ => &[],
        }
    }
}
