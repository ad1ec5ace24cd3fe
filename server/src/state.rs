// server/src/state.rs
use shopsmart::ProductService;

#[derive(Clone, Debug)]
pub struct AppState {
  pub product_service: ProductService,
}

impl AppState {
  pub fn new(product_service: ProductService) -> Self {
    Self { product_service }
  }
}
