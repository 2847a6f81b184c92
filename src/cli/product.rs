//! Product command implementations

use tabled::Tabled;

use super::vendor::confirm;
use super::{CommandContext, ProductCommands, notified};
use crate::client::ProductApi;
use crate::client::models::{
    ApproveProductRequest, CreateProductRequest, Product, UpdateProductRequest,
};
use crate::error::Result;
use crate::output;

/// Product for table display
#[derive(Tabled)]
pub struct ProductDisplay {
    #[tabled(rename = "PRODUCT ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "VENDOR")]
    vendor: String,
    #[tabled(rename = "VERSION")]
    version: String,
    #[tabled(rename = "APPROVAL")]
    approval: String,
}

impl From<Product> for ProductDisplay {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            vendor: product.vendor_id,
            version: product.version.unwrap_or_else(|| "-".to_string()),
            approval: product
                .approval_status
                .unwrap_or_else(|| "PENDING".to_string()),
        }
    }
}

pub async fn run(ctx: &CommandContext, command: ProductCommands) -> Result<()> {
    match command {
        ProductCommands::List { vendor } => {
            let products = match vendor {
                Some(vendor_id) => ctx.client.list_products_by_vendor(&vendor_id).await?,
                None => ctx.client.list_products().await?,
            };
            output::print_list::<_, ProductDisplay>(&products, ctx.format)
        }
        ProductCommands::Get { id } => {
            let product = ctx.client.get_product(&id).await?;
            output::print_record(&product, ctx.format)
        }
        ProductCommands::Create {
            vendor,
            name,
            description,
            version,
        } => {
            let request = CreateProductRequest {
                vendor_id: vendor,
                name,
                description,
                version,
            };
            let product = ctx.client.create_product(&request).await.map_err(notified)?;
            output::print_record(&product, ctx.format)
        }
        ProductCommands::Update {
            id,
            name,
            description,
            version,
        } => {
            let request = UpdateProductRequest {
                name,
                description,
                version,
            };
            ctx.client
                .update_product(&id, &request)
                .await
                .map_err(notified)
        }
        ProductCommands::Approve {
            id,
            reject,
            comments,
        } => {
            let request = ApproveProductRequest {
                approved: !reject,
                comments,
            };
            ctx.client
                .approve_product(&id, &request)
                .await
                .map_err(notified)
        }
        ProductCommands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete product {}?", id))? {
                return Ok(());
            }
            ctx.client.delete_product(&id).await.map_err(notified)
        }
    }
}
