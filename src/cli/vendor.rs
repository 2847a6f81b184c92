//! Vendor command implementations

use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use super::{CommandContext, VendorCommands, notified};
use crate::client::VendorApi;
use crate::client::models::{CreateVendorRequest, UpdateVendorRequest, Vendor};
use crate::error::Result;
use crate::output;

/// Vendor for table display
#[derive(Tabled)]
pub struct VendorDisplay {
    #[tabled(rename = "VENDOR ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "PRODUCTS")]
    products: u32,
    #[tabled(rename = "CONTACT")]
    contact: String,
}

impl From<Vendor> for VendorDisplay {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            status: vendor.status.unwrap_or_else(|| "-".to_string()),
            products: vendor.product_count,
            contact: vendor.contact_email.unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn run(ctx: &CommandContext, command: VendorCommands) -> Result<()> {
    match command {
        VendorCommands::List => {
            let vendors = ctx.client.list_vendors().await?;
            output::print_list::<_, VendorDisplay>(&vendors, ctx.format)
        }
        VendorCommands::Get { id } => {
            let vendor = ctx.client.get_vendor(&id).await?;
            output::print_record(&vendor, ctx.format)
        }
        VendorCommands::Create {
            name,
            email,
            website,
        } => {
            let request = CreateVendorRequest {
                name,
                contact_email: email,
                website,
            };
            let vendor = ctx.client.create_vendor(&request).await.map_err(notified)?;
            output::print_record(&vendor, ctx.format)
        }
        VendorCommands::Update {
            id,
            name,
            email,
            website,
            status,
        } => {
            let request = UpdateVendorRequest {
                name,
                contact_email: email,
                website,
                status,
            };
            ctx.client
                .update_vendor(&id, &request)
                .await
                .map_err(notified)
        }
        VendorCommands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete vendor {}?", id))? {
                return Ok(());
            }
            ctx.client.delete_vendor(&id).await.map_err(notified)
        }
    }
}

pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
