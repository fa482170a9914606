use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::products::list_products,
        api::products::get_product,
        api::products::create_product,
        api::products::update_product,
        api::products::delete_product,
    ),
    components(
        schemas(
            crate::domain::Product,
            crate::domain::FieldError,
            api::extract::ProductPayload,
        )
    ),
    tags(
        (name = "products-inventory", description = "Products Inventory API")
    )
)]
pub struct ApiDoc;
