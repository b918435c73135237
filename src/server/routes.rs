// server/routes.rs - HTTP handlers and route wiring

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::server::error::ServiceError;
use crate::server::store::{ProductInput, ProductPatch, ProductStore, StoredProduct};

/// Query window for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

#[derive(Serialize)]
struct ProductBody {
    message: String,
    product: StoredProduct,
}

#[derive(Serialize)]
struct ProductListBody {
    message: String,
    products: Vec<StoredProduct>,
    total: usize,
    skip: u32,
    limit: u32,
}

#[derive(Serialize)]
struct SearchBody {
    message: String,
    products: Vec<StoredProduct>,
    total: usize,
}

/// Registers every route of the products API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health))
        .route("/products/", web::post().to(create_product))
        .route("/products/", web::get().to(list_products))
        .route("/products/search/{term}", web::get().to(search_products))
        .route("/products/{id}", web::get().to(get_product))
        .route("/products/{id}", web::put().to(update_product))
        .route("/products/{id}", web::delete().to(delete_product));
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Products CRUD API",
        "version": "1.0.0",
    }))
}

async fn health(store: web::Data<ProductStore>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "products": store.len(),
        "message": "API funcionando correctamente",
    }))
}

async fn create_product(
    store: web::Data<ProductStore>,
    input: web::Json<ProductInput>,
) -> impl Responder {
    let product = store.create(input.into_inner());
    tracing::info!("producto creado: id={} name={:?}", product.id, product.name);
    HttpResponse::Created().json(ProductBody {
        message: "Producto creado exitosamente".to_string(),
        product,
    })
}

async fn list_products(
    store: web::Data<ProductStore>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ServiceError> {
    let PageQuery { skip, limit } = query.into_inner();
    if !(1..=100).contains(&limit) {
        return Err(ServiceError::InvalidQuery(format!(
            "limit debe estar entre 1 y 100, recibido {limit}"
        )));
    }

    let products = store.list(skip as usize, limit as usize);
    tracing::debug!("listado: skip={} limit={} -> {} productos", skip, limit, products.len());
    Ok(HttpResponse::Ok().json(ProductListBody {
        message: "Productos obtenidos exitosamente".to_string(),
        total: products.len(),
        products,
        skip,
        limit,
    }))
}

async fn get_product(
    store: web::Data<ProductStore>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    let product = store
        .get(id.into_inner())
        .ok_or(ServiceError::ProductNotFound)?;
    Ok(HttpResponse::Ok().json(ProductBody {
        message: "Producto encontrado".to_string(),
        product,
    }))
}

async fn update_product(
    store: web::Data<ProductStore>,
    id: web::Path<u64>,
    patch: web::Json<ProductPatch>,
) -> Result<HttpResponse, ServiceError> {
    let product = store
        .update(id.into_inner(), patch.into_inner())
        .ok_or(ServiceError::ProductNotFound)?;
    tracing::info!("producto actualizado: id={}", product.id);
    Ok(HttpResponse::Ok().json(ProductBody {
        message: "Producto actualizado exitosamente".to_string(),
        product,
    }))
}

async fn delete_product(
    store: web::Data<ProductStore>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    if !store.delete(id) {
        return Err(ServiceError::ProductNotFound);
    }
    tracing::info!("producto eliminado: id={}", id);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Producto eliminado exitosamente",
        "product_id": id,
    })))
}

async fn search_products(
    store: web::Data<ProductStore>,
    term: web::Path<String>,
) -> impl Responder {
    let term = term.into_inner();
    let products = store.search(&term);
    HttpResponse::Ok().json(SearchBody {
        message: format!("Búsqueda completada para: {term}"),
        total: products.len(),
        products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_limit_is_ten() {
        assert_eq!(default_limit(), 10);
    }

    #[test]
    fn test_list_body_wire_shape() {
        let now = Utc::now();
        let body = ProductListBody {
            message: "Productos obtenidos exitosamente".to_string(),
            products: vec![StoredProduct {
                id: 1,
                name: "Widget".to_string(),
                price: 9.99,
                description: None,
                stock: 0,
                created_at: now,
                updated_at: now,
            }],
            total: 1,
            skip: 0,
            limit: 10,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["products"][0]["name"], "Widget");
        assert_eq!(value["products"][0]["stock"], 0);
        assert_eq!(value["limit"], 10);
    }
}
